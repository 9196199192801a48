/*
 * Responsibility
 * - tokio runtime 起動
 * - app::run() の呼び出し (ロジックは置かない)
 */
use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    dbsc_registration::app::run().await
}
