//! Background detachment

use lldpd_core::Result;
use std::io;

/// Detach from the controlling terminal and continue in the background
///
/// Must be called before any threads or async runtime are started. The
/// working directory becomes `/` and standard streams go to `/dev/null`.
pub fn detach() -> Result<()> {
    // SAFETY: daemon(3) forks; the process is still single-threaded here.
    check(unsafe { libc::daemon(0, 0) })
}

/// Map a libc return code to the pending OS error
fn check(rc: libc::c_int) -> Result<()> {
    if rc == -1 {
        return Err(io::Error::last_os_error().into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lldpd_core::Error;

    #[test]
    fn test_check_success() {
        assert!(check(0).is_ok());
    }

    #[test]
    fn test_check_failure_is_io_error() {
        assert!(matches!(check(-1), Err(Error::Io(_))));
    }
}
