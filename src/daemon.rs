//! Detach from the controlling terminal (POSIX double fork).
//!
//! Must run before the tokio runtime or any other thread is started.

use std::io;

#[cfg(unix)]
pub fn daemonize() -> io::Result<()> {
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::os::unix::io::AsRawFd;

    // SAFETY: the process is still single-threaded here, so fork() only
    // duplicates the calling thread and the parent exits without unwinding.
    unsafe {
        fork_and_exit_parent()?;
        if libc::setsid() == -1 {
            return Err(io::Error::last_os_error());
        }
        fork_and_exit_parent()?;
    }

    let _ = io::stdout().flush();
    let _ = io::stderr().flush();

    let dev_null = OpenOptions::new()
        .read(true)
        .write(true)
        .open("/dev/null")?;
    let fd = dev_null.as_raw_fd();
    for target in [libc::STDIN_FILENO, libc::STDOUT_FILENO, libc::STDERR_FILENO] {
        // SAFETY: both descriptors are valid for the duration of the call.
        if unsafe { libc::dup2(fd, target) } == -1 {
            return Err(io::Error::last_os_error());
        }
    }
    Ok(())
}

#[cfg(unix)]
unsafe fn fork_and_exit_parent() -> io::Result<()> {
    match libc::fork() {
        -1 => Err(io::Error::last_os_error()),
        0 => Ok(()),
        _ => libc::_exit(0),
    }
}

#[cfg(not(unix))]
pub fn daemonize() -> io::Result<()> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "background mode is only available on POSIX systems",
    ))
}
