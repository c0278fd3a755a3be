use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::Mutex,
};

struct Inner {
    file: File,
    size: u64,
}

/// Append-only log file that rotates to `<name>.1` on open and whenever a
/// write would push it past `max_size` bytes.
pub struct LogFile {
    path: PathBuf,
    max_size: u64,
    inner: Mutex<Inner>,
}

fn rotated_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".1");
    PathBuf::from(name)
}

fn rotate(path: &Path) -> io::Result<()> {
    match fs::rename(path, rotated_path(path)) {
        Err(err) if err.kind() != io::ErrorKind::NotFound => Err(err),
        _ => Ok(()),
    }
}

fn create(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

/// Moves the current file to `<name>.1` and continues in a fresh one. If
/// the fresh file cannot be opened the current file is moved back.
fn roll_over(
    path: &Path,
    inner: &mut Inner,
    open: impl Fn(&Path) -> io::Result<File>,
) -> io::Result<()> {
    inner.file.flush()?;
    rotate(path)?;

    match open(path) {
        Ok(file) => {
            inner.file = file;
            inner.size = 0;
            Ok(())
        }
        Err(err) => {
            fs::rename(rotated_path(path), path)?;
            Err(err)
        }
    }
}

impl LogFile {
    pub fn open(path: impl AsRef<Path>, max_size: u64) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        rotate(&path)?;
        let file = create(&path)?;

        Ok(Self {
            path,
            max_size,
            inner: Mutex::new(Inner { file, size: 0 }),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> io::Result<std::sync::MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log file lock poisoned"))
    }

    /// Flushes and syncs pending output; called on shutdown.
    pub fn close(&self) -> io::Result<()> {
        let mut inner = self.lock()?;
        inner.file.flush()?;
        inner.file.sync_all()
    }
}

impl Write for &LogFile {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self.lock()?;

        if inner.size > 0 && inner.size + buf.len() as u64 > self.max_size {
            roll_over(&self.path, &mut inner, create)?;
        }

        let written = inner.file.write(buf)?;
        inner.size += written as u64;
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.lock()?.file.flush()
    }
}
