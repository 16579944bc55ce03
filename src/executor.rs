use std::io;
use std::process::Command;

use crate::clock::{self, Timespec};
use crate::errors::BenchrunError;
use crate::types::{CpuTime, Sample};

/// Run `argv` once, blocking until the subprocess exits, and return one
/// fully populated [`Sample`].
///
/// The child inherits the parent's standard streams; quiet mode does not
/// redirect them (a known gap, kept rather than silently resolved). There
/// is no timeout: a command that never exits blocks the harness
/// indefinitely.
///
/// Any spawn failure or non-zero/abnormal exit is fatal to the whole run;
/// the caller is expected to abort and discard samples collected so far.
pub fn measure(argv: &[String]) -> Result<Sample, BenchrunError> {
    let program = argv.first().ok_or(BenchrunError::EmptyCommand)?;

    let start = Timespec::now().map_err(BenchrunError::ClockFailed)?;

    let child = Command::new(program)
        .args(&argv[1..])
        .spawn()
        .map_err(|source| BenchrunError::SpawnFailed {
            command: program.clone(),
            source,
        })?;

    // wait4 reaps the child and hands back its rusage accounting in one
    // call; the std Child handle is only used for spawning and the pid.
    let (status, rusage) =
        wait_with_rusage(child.id() as libc::pid_t).map_err(|source| BenchrunError::WaitFailed {
            command: program.clone(),
            source,
        })?;

    let end = Timespec::now().map_err(BenchrunError::ClockFailed)?;

    if !(libc::WIFEXITED(status) && libc::WEXITSTATUS(status) == 0) {
        return Err(BenchrunError::CommandFailed {
            command: program.clone(),
            status: describe_status(status),
        });
    }

    Ok(Sample {
        wall: clock::diff(start, end),
        user_time: CpuTime {
            seconds: rusage.ru_utime.tv_sec as i64,
            microseconds: rusage.ru_utime.tv_usec as i64,
        },
        sys_time: CpuTime {
            seconds: rusage.ru_stime.tv_sec as i64,
            microseconds: rusage.ru_stime.tv_usec as i64,
        },
        max_set_size: rusage.ru_maxrss as i64,
        soft_faults: rusage.ru_minflt as i64,
        hard_faults: rusage.ru_majflt as i64,
        in_blocks: rusage.ru_inblock as i64,
        out_blocks: rusage.ru_oublock as i64,
        voluntary_switches: rusage.ru_nvcsw as i64,
        involuntary_switches: rusage.ru_nivcsw as i64,
    })
}

/// Block until `pid` terminates, reaping it together with its resource
/// accounting. Restarts on `EINTR`.
fn wait_with_rusage(pid: libc::pid_t) -> io::Result<(libc::c_int, libc::rusage)> {
    let mut status: libc::c_int = 0;
    // SAFETY: rusage is plain old data; an all-zero value is valid.
    let mut rusage: libc::rusage = unsafe { std::mem::zeroed() };
    loop {
        // SAFETY: status and rusage are valid, writable out-pointers.
        let rc = unsafe { libc::wait4(pid, &mut status, 0, &mut rusage) };
        if rc == pid {
            return Ok((status, rusage));
        }
        let err = io::Error::last_os_error();
        if rc == -1 && err.kind() == io::ErrorKind::Interrupted {
            continue;
        }
        return Err(err);
    }
}

fn describe_status(status: libc::c_int) -> String {
    if libc::WIFEXITED(status) {
        format!("exited with code {}", libc::WEXITSTATUS(status))
    } else if libc::WIFSIGNALED(status) {
        format!("killed by signal {}", libc::WTERMSIG(status))
    } else {
        format!("unexpected wait status {}", status)
    }
}
