//! 疑似プログレス
//!
//! 実際のアップロード・処理状況とは無関係な演出用の進捗。
//! 一定間隔で固定幅ずつ進み、100%で打ち止め。

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progress {
    percent: u8,
    ticks: u32,
}

impl Progress {
    /// 1ティック進める。100%に達したら true
    pub fn advance(&mut self, step: u8) -> bool {
        if self.is_complete() {
            return true;
        }
        self.percent = self.percent.saturating_add(step).min(100);
        self.ticks += 1;
        self.is_complete()
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    /// 0.0〜1.0
    pub fn fraction(&self) -> f32 {
        self.percent as f32 / 100.0
    }

    pub fn is_complete(&self) -> bool {
        self.percent >= 100
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ten_steps_complete() {
        let mut progress = Progress::default();
        for i in 1..10 {
            assert!(!progress.advance(10));
            assert_eq!(progress.percent(), i * 10);
        }
        assert!(progress.advance(10));
        assert_eq!(progress.percent(), 100);
        assert_eq!(progress.ticks(), 10);
        assert_eq!(progress.fraction(), 1.0);
    }

    #[test]
    fn test_advance_after_complete_is_noop() {
        let mut progress = Progress::default();
        while !progress.advance(10) {}
        assert!(progress.advance(10));
        assert_eq!(progress.ticks(), 10);
        assert_eq!(progress.percent(), 100);
    }

    #[test]
    fn test_uneven_step_caps_at_100() {
        let mut progress = Progress::default();
        let mut ticks = 0;
        while !progress.advance(30) {
            ticks += 1;
        }
        assert_eq!(ticks + 1, 4);
        assert_eq!(progress.percent(), 100);
    }
}
