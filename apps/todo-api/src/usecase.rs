//! # ユースケース層
//!
//! ハンドラから呼び出されるアプリケーションロジックを定義する。
//! リポジトリと時計はトレイトオブジェクトとして注入する。

pub mod todo;

pub use todo::TodoUseCaseImpl;
