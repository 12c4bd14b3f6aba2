use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

/// Opens a temporary file in the directory `path` will live in.
///
/// On unix the file is created with mode `0o666` less the umask, the same
/// mode `File::create` would give `path` itself.
fn temp_file_beside(path: &Path) -> io::Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }

    builder.tempfile_in(dir)
}

/// Writes through a temporary file next to `path` and renames it into place
/// once `write` succeeds. A failed write leaves nothing behind and keeps any
/// previous file at `path`.
pub(crate) fn write_atomically<E, F>(
    path: &Path,
    io_error: impl Fn(io::Error) -> E,
    write: F,
) -> Result<(), E>
where
    F: FnOnce(&mut BufWriter<&File>) -> Result<(), E>,
{
    let temp = temp_file_beside(path).map_err(&io_error)?;

    {
        let mut writer = BufWriter::new(temp.as_file());
        write(&mut writer)?;
        writer.flush().map_err(&io_error)?;
    }

    temp.persist(path).map_err(|e| io_error(e.error))?;

    Ok(())
}
