//! Splash screen animation state

use std::time::{Duration, Instant};

/// Animation phase for splash screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplashPhase {
    /// Static logo display
    Display,
    /// Logo animating upward
    ScrollUp,
    /// Animation finished
    Complete,
}

/// Splash screen animation state
#[derive(Debug)]
pub struct SplashState {
    /// When the splash started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: SplashPhase,
    /// Current vertical offset (for scroll animation)
    pub scroll_offset: f32,
}

impl SplashState {
    /// Display duration before animation starts
    const DISPLAY_DURATION: Duration = Duration::from_millis(1300);
    /// Duration of scroll-up animation
    const ANIMATION_DURATION: Duration = Duration::from_millis(800);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            phase: SplashPhase::Display,
            scroll_offset: 0.0,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self, terminal_height: u16) {
        self.advance(self.start_time.elapsed(), terminal_height);
    }

    /// Move the animation to `elapsed` since start
    fn advance(&mut self, elapsed: Duration, terminal_height: u16) {
        if self.phase == SplashPhase::Complete {
            return;
        }

        if elapsed < Self::DISPLAY_DURATION {
            self.phase = SplashPhase::Display;
            self.scroll_offset = 0.0;
        } else if elapsed < Self::DISPLAY_DURATION + Self::ANIMATION_DURATION {
            self.phase = SplashPhase::ScrollUp;
            let animation_elapsed = elapsed - Self::DISPLAY_DURATION;
            let progress = animation_elapsed.as_secs_f32() / Self::ANIMATION_DURATION.as_secs_f32();
            // cubic ease-out: fast start, gentle stop
            let eased = simple_easing::cubic_out(progress);
            self.scroll_offset = eased * (terminal_height as f32);
        } else {
            self.phase = SplashPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = SplashPhase::Complete;
    }

    /// Check if animation is complete
    pub fn is_complete(&self) -> bool {
        self.phase == SplashPhase::Complete
    }
}

impl Default for SplashState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_new_starts_in_display_phase() {
        let state = SplashState::new();
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn test_update_stays_in_display_phase_initially() {
        let mut state = SplashState::new();
        state.update(24);
        assert_eq!(state.phase, SplashPhase::Display);
        assert_eq!(state.scroll_offset, 0.0);
    }

    #[test]
    fn test_skip_immediately_completes() {
        let mut state = SplashState::new();
        state.skip();
        state.skip();
        assert!(state.is_complete());
    }

    mod timeline {
        use super::*;

        #[test]
        fn test_scrolls_after_display_duration() {
            let mut state = SplashState::new();
            state.advance(ms(1700), 40);
            assert_eq!(state.phase, SplashPhase::ScrollUp);
            assert!(state.scroll_offset > 0.0);
            assert!(state.scroll_offset < 40.0);
        }

        #[test]
        fn test_offset_grows_with_time() {
            let mut state = SplashState::new();
            state.advance(ms(1400), 40);
            let early = state.scroll_offset;
            state.advance(ms(1900), 40);
            assert!(state.scroll_offset > early);
        }

        #[test]
        fn test_completes_after_animation() {
            let mut state = SplashState::new();
            state.advance(ms(2100), 40);
            assert!(state.is_complete());
        }

        #[test]
        fn test_skipped_state_never_restarts() {
            let mut state = SplashState::new();
            state.skip();
            state.advance(ms(0), 40);
            assert!(state.is_complete());
        }
    }
}
