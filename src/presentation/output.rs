//! Exit status and user-facing messages

use std::ops::BitOrAssign;

use crate::application::RemovalFailure;

/// Name used as the prefix of every diagnostic
pub const PROGRAM_NAME: &str = "trash-empty";

/// Successful termination (sysexits.h)
pub const EX_OK: i32 = 0;

/// Command line usage error (sysexits.h)
pub const EX_USAGE: i32 = 64;

/// Exit status accumulated over a run by OR-ing error bits together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitStatus(i32);

impl ExitStatus {
    pub fn ok() -> Self {
        Self(EX_OK)
    }

    pub fn code(&self) -> i32 {
        self.0
    }

    pub fn is_success(&self) -> bool {
        self.0 == EX_OK
    }
}

impl Default for ExitStatus {
    fn default() -> Self {
        Self::ok()
    }
}

impl BitOrAssign<i32> for ExitStatus {
    fn bitor_assign(&mut self, bits: i32) {
        self.0 |= bits;
    }
}

/// `trash-empty: cannot remove <path>`
pub fn render_removal_failure(failure: &RemovalFailure) -> String {
    format!("{}: {}", PROGRAM_NAME, failure)
}
