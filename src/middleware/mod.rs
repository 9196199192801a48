/*
 * Responsibility
 * - middleware の公開インターフェース
 * - app.rs から cors / http / security_headers の apply(...) を呼ぶ
 */
pub mod cors;
pub mod http;
pub mod security_headers;
