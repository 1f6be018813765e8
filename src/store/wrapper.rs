use std::io::{Read, Seek, SeekFrom, Write};

use super::Store;
use crate::Result;

/// Store over any caller-supplied `std::io::Read + Write + Seek` object.
///
/// Useful for `std::io::Cursor`, buffered writers over files, or test doubles.
///
/// # Examples
///
/// ```rust
/// use binscope::{Stream, Wrapper};
/// use std::io::Cursor;
///
/// let mut stream = Stream::new(Wrapper::new(Cursor::new(Vec::new())))?;
/// stream.write_ushort(0xBEEF)?;
/// assert_eq!(stream.into_inner().into_inner().into_inner(), [0xBE, 0xEF]);
/// # Ok::<(), binscope::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Wrapper<T> {
    inner: T,
}

impl<T: Read + Write + Seek> Wrapper<T> {
    /// Wraps `inner`; its current position becomes the store position.
    pub fn new(inner: T) -> Wrapper<T> {
        Wrapper { inner }
    }

    /// The wrapped object.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// The wrapped object, mutably.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Unwraps the object.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T: Read + Write + Seek> Store for Wrapper<T> {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        Ok(self.inner.read(buf)?)
    }

    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        Ok(self.inner.write(buf)?)
    }

    fn tell(&mut self) -> Result<u64> {
        Ok(self.inner.stream_position()?)
    }

    fn seek(&mut self, pos: SeekFrom) -> Result<u64> {
        Ok(self.inner.seek(pos)?)
    }

    fn flush(&mut self) -> Result<()> {
        Ok(self.inner.flush()?)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn cursor() {
        let mut wrapper = Wrapper::new(Cursor::new(vec![0u8; 2]));

        wrapper.seek(SeekFrom::Start(1)).unwrap();
        assert_eq!(wrapper.write(&[7, 8]).unwrap(), 2);
        assert_eq!(wrapper.tell().unwrap(), 3);
        assert_eq!(wrapper.get_ref().get_ref(), &[0, 7, 8]);

        wrapper.get_mut().set_position(0);
        let mut buffer = [0u8; 4];
        assert_eq!(wrapper.read(&mut buffer).unwrap(), 3);
        assert_eq!(wrapper.into_inner().into_inner(), [0, 7, 8]);
    }
}
