//! Reverse name lookup for interface addresses

use lldpd_core::NameResolution;
use std::ffi::CStr;
use std::mem;
use std::net::Ipv4Addr;
use tracing::debug;

/// Buffer size for a resolved host name (glibc `NI_MAXHOST`)
const MAX_HOST_LEN: usize = 1025;

/// Render `addr` according to `mode`
///
/// A failed reverse lookup falls back to the dotted-quad text.
pub fn ipv4_name(addr: Ipv4Addr, mode: NameResolution) -> String {
    match mode {
        NameResolution::Numeric => addr.to_string(),
        NameResolution::Resolve => reverse_lookup(addr).unwrap_or_else(|| {
            debug!(%addr, "No PTR name, using numeric address");
            addr.to_string()
        }),
    }
}

/// Look up the host name of `addr` through the system resolver
pub fn reverse_lookup(addr: Ipv4Addr) -> Option<String> {
    // SAFETY: sockaddr_in is plain old data; all-zero is a valid value.
    let mut sin: libc::sockaddr_in = unsafe { mem::zeroed() };
    sin.sin_family = libc::AF_INET as libc::sa_family_t;
    sin.sin_addr = libc::in_addr {
        s_addr: u32::from(addr).to_be(),
    };

    let mut host = [0 as libc::c_char; MAX_HOST_LEN];

    // SAFETY: every pointer is valid for the length passed with it, and
    // NI_NAMEREQD makes getnameinfo fail instead of writing a numeric name.
    let ret = unsafe {
        libc::getnameinfo(
            &sin as *const libc::sockaddr_in as *const libc::sockaddr,
            mem::size_of::<libc::sockaddr_in>() as libc::socklen_t,
            host.as_mut_ptr(),
            host.len() as libc::socklen_t,
            std::ptr::null_mut(),
            0,
            libc::NI_NAMEREQD,
        )
    };
    if ret != 0 {
        return None;
    }

    // SAFETY: on success getnameinfo wrote a NUL-terminated string into host.
    let name = unsafe { CStr::from_ptr(host.as_ptr()) };
    let name = name.to_string_lossy().into_owned();
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}
