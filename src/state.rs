/*
 * Responsibility
 * - Router に紐づける共有コンテキスト (AppState)
 * - Clone 前提で持つ (中身は Copy な上限値のみ)
 * - パーサ自体は状態を持たない (純粋関数) ので、ここには入れない
 */
use crate::config::Config;

#[derive(Clone, Copy, Debug)]
pub struct AppState {
    pub max_header_entries: usize,
}

impl AppState {
    pub fn new(max_header_entries: usize) -> Self {
        Self { max_header_entries }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.max_header_entries)
    }
}
