//! # Clock（時刻プロバイダ）
//!
//! ユースケース層での `Utc::now()` 直接呼び出しを置き換え、
//! テストで固定時刻を注入可能にするための抽象化。

use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};

/// 現在時刻を提供するトレイト
pub trait Clock: Send + Sync {
   fn now(&self) -> DateTime<Utc>;
}

/// 実際のシステム時刻を返す実装
pub struct SystemClock;

impl Clock for SystemClock {
   fn now(&self) -> DateTime<Utc> {
      Utc::now()
   }
}

/// 固定時刻を返すテスト用実装
pub struct FixedClock {
   now: DateTime<Utc>,
}

impl FixedClock {
   pub fn new(now: DateTime<Utc>) -> Self {
      Self { now }
   }
}

impl Clock for FixedClock {
   fn now(&self) -> DateTime<Utc> {
      self.now
   }
}

/// 呼び出しごとに一定間隔だけ進むテスト用実装
///
/// 作成と更新で異なる時刻が必要なテスト（`updated_at` の更新確認など）で使う。
pub struct SteppingClock {
   next: Mutex<DateTime<Utc>>,
   step: Duration,
}

impl SteppingClock {
   pub fn new(start: DateTime<Utc>, step: Duration) -> Self {
      Self {
         next: Mutex::new(start),
         step,
      }
   }
}

impl Clock for SteppingClock {
   fn now(&self) -> DateTime<Utc> {
      let mut next = self.next.lock().unwrap_or_else(|e| e.into_inner());
      let now = *next;
      *next = now + self.step;
      now
   }
}
