use std::io::Read;

pub(crate) trait ValueReaderExt
where
    Self: Read,
{
    fn read_value<T: Readable>(&mut self) -> std::io::Result<T>;
}

pub(crate) trait Readable {
    fn read_from_reader<R: Read + ?Sized>(reader: &mut R) -> std::io::Result<Self>
    where
        Self: Sized;
}

impl<R: Read + ?Sized> ValueReaderExt for R {
    fn read_value<T: Readable>(&mut self) -> std::io::Result<T> {
        T::read_from_reader(self)
    }
}

impl<const N: usize> Readable for [u8; N] {
    fn read_from_reader<R: Read + ?Sized>(reader: &mut R) -> std::io::Result<Self> {
        let mut buf = [0u8; N];
        reader.read_exact(&mut buf)?;
        Ok(buf)
    }
}

macro_rules! impl_readable_for {
    ($($t:ty),*) => {
        $(
            impl Readable for $t {
                fn read_from_reader<R: Read + ?Sized>(reader: &mut R) -> std::io::Result<Self> {
                    let buf = reader.read_value()?;
                    Ok(Self::from_be_bytes(buf))
                }
            }
        )*
    };
}

impl_readable_for!(u8, u16, i32, i64, f32, f64);

/// Reads `len` bytes and advances the reader by `len` bytes.
pub(crate) fn read_byte_chunk<R>(reader: &mut R, len: usize) -> std::io::Result<Vec<u8>>
where
    R: Read + ?Sized,
{
    let mut buf = vec![0u8; len];
    reader.read_exact(buf.as_mut_slice())?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::{ValueReaderExt, read_byte_chunk};

    #[test]
    fn read_u16_success() {
        let mut reader = [0x01u8, 0x02].as_slice();
        let value: u16 = reader.read_value().unwrap();
        assert_eq!(value, 0x0102);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_u16_failed() {
        let mut reader = [0x01u8].as_slice();
        let err = reader.read_value::<u16>().unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn read_i32_success() {
        let mut reader = [0x01u8, 0x02, 0x03, 0x04].as_slice();
        let value: i32 = reader.read_value().unwrap();
        assert_eq!(value, 0x0102_0304);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_i64_success() {
        let bytes = 7i64.to_be_bytes();
        let mut reader = bytes.as_slice();
        let value: i64 = reader.read_value().unwrap();
        assert_eq!(value, 7);
        assert!(reader.is_empty());
    }

    #[test]
    fn read_f64_success() {
        let bytes = 0.5f64.to_be_bytes();
        let mut reader = bytes.as_slice();
        let value: f64 = reader.read_value().unwrap();
        assert!((value - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn read_byte_chunk_success() {
        let mut reader = [0x01u8, 0x02, 0x03, 0x04].as_slice();
        let buf = read_byte_chunk(&mut reader, 3).unwrap();
        assert_eq!(buf, [0x01, 0x02, 0x03]);
        assert_eq!(reader, [0x04u8]);
    }

    #[test]
    fn read_byte_chunk_failed() {
        let mut reader = [0x01u8, 0x02].as_slice();
        let err = read_byte_chunk(&mut reader, 3).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::UnexpectedEof);
    }
}
