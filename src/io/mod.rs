//! Binary tensor codec
//!
//! A tensor file is a fixed sequence of native-endian fields with no magic
//! number, version or compression:
//!
//! ```text
//! ndim       u64
//! dtype      u32            (stable tag, see DType::tag)
//! size       u64            (element count)
//! shape      u64 x ndim
//! payload    size * dtype width bytes, row-major
//! ```
//!
//! Readers and writers must agree on byte order; files are not portable
//! between hosts of different endianness.

use crate::dtype::DType;
use crate::error::{Error, Result};
use crate::runtime::Device;
use crate::tensor::{Layout, Storage, Tensor};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Write `tensor` to `path`, replacing any existing file
pub fn save(tensor: &Tensor, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| Error::io("creating tensor file", e))?;
    let mut writer = BufWriter::new(file);
    write_to(tensor, &mut writer)?;
    writer.flush().map_err(|e| Error::io("flushing tensor file", e))?;
    tracing::debug!(
        path = %path.display(),
        shape = ?tensor.shape(),
        dtype = %tensor.dtype(),
        "saved tensor"
    );
    Ok(())
}

/// Read a tensor from `path` onto the CPU device
pub fn load(path: impl AsRef<Path>) -> Result<Tensor> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::io("opening tensor file", e))?;
    let tensor = read_from(&mut BufReader::new(file))?;
    tracing::debug!(
        path = %path.display(),
        shape = ?tensor.shape(),
        dtype = %tensor.dtype(),
        "loaded tensor"
    );
    Ok(tensor)
}

/// Encode `tensor` into any writer
///
/// Strided views are written in logical (row-major) order.
pub fn write_to<W: Write>(tensor: &Tensor, writer: &mut W) -> Result<()> {
    let write = |w: &mut W, bytes: &[u8]| w.write_all(bytes).map_err(|e| Error::io("writing tensor", e));

    write(writer, &(tensor.ndim() as u64).to_ne_bytes())?;
    write(writer, &tensor.dtype().tag().to_ne_bytes())?;
    write(writer, &(tensor.numel() as u64).to_ne_bytes())?;
    for &dim in tensor.shape() {
        write(writer, &(dim as u64).to_ne_bytes())?;
    }

    let dense = tensor.contiguous()?;
    let width = dense.dtype().size_in_bytes();
    let start = dense.layout().offset() * width;
    let bytes = dense.storage().read_bytes();
    write(writer, &bytes[start..start + dense.numel() * width])
}

fn read_array<R: Read, const N: usize>(reader: &mut R, context: &'static str) -> Result<[u8; N]> {
    let mut buf = [0u8; N];
    reader.read_exact(&mut buf).map_err(|e| Error::io(context, e))?;
    Ok(buf)
}

fn read_len<R: Read>(reader: &mut R, context: &'static str) -> Result<usize> {
    let value = u64::from_ne_bytes(read_array(reader, context)?);
    usize::try_from(value).map_err(|_| Error::AllocationFailure { size: usize::MAX })
}

/// Decode a tensor from any reader
///
/// Fails with `Io` on a short read, `UnknownDTypeTag` on an unrecognized
/// dtype, and `ShapeMismatch` when the declared size disagrees with the
/// shape.
pub fn read_from<R: Read>(reader: &mut R) -> Result<Tensor> {
    let ndim = read_len(reader, "reading ndim")?;
    let tag = u32::from_ne_bytes(read_array(reader, "reading dtype tag")?);
    let dtype = DType::from_tag(tag).ok_or(Error::UnknownDTypeTag { tag })?;
    let size = read_len(reader, "reading element count")?;

    // Cap the up-front reservation; a corrupt ndim then fails on a short read
    let mut shape = Vec::with_capacity(ndim.min(64));
    for _ in 0..ndim {
        shape.push(read_len(reader, "reading shape")?);
    }

    let numel = shape
        .iter()
        .try_fold(1usize, |acc, &d| acc.checked_mul(d))
        .ok_or(Error::AllocationFailure { size: usize::MAX })?;
    if numel != size {
        return Err(Error::ShapeMismatch {
            expected: shape,
            got: vec![size],
        });
    }

    let storage = Storage::new(size, dtype)?;
    reader
        .read_exact(&mut storage.write_bytes())
        .map_err(|e| Error::io("reading payload", e))?;
    if dtype == DType::Bool {
        // Any non-zero byte reads as true
        storage.write_bytes().iter_mut().for_each(|b| *b = (*b != 0) as u8);
    }
    Ok(Tensor::from_parts(storage, Layout::contiguous(&shape), Device::cpu()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::CompareOps;
    use std::io::{Cursor, ErrorKind};

    fn encode(t: &Tensor) -> Vec<u8> {
        let mut buf = Vec::new();
        write_to(t, &mut buf).unwrap();
        buf
    }

    #[test]
    fn test_header_layout() {
        let t = Tensor::from_slice(&[1i32, 2, 3, 4, 5, 6], &[2, 3], &Device::cpu()).unwrap();
        let buf = encode(&t);
        assert_eq!(buf.len(), 8 + 4 + 8 + 2 * 8 + 6 * 4);
        assert_eq!(u64::from_ne_bytes(buf[0..8].try_into().unwrap()), 2);
        assert_eq!(u32::from_ne_bytes(buf[8..12].try_into().unwrap()), DType::I32.tag());
        assert_eq!(u64::from_ne_bytes(buf[12..20].try_into().unwrap()), 6);
        assert_eq!(u64::from_ne_bytes(buf[20..28].try_into().unwrap()), 2);
        assert_eq!(u64::from_ne_bytes(buf[28..36].try_into().unwrap()), 3);
    }

    #[test]
    fn test_strided_view_is_written_in_logical_order() {
        let t = Tensor::from_slice(&[1u8, 2, 3, 4], &[2, 2], &Device::cpu()).unwrap();
        let tt = t.transpose(None).unwrap();
        let back = read_from(&mut Cursor::new(encode(&tt))).unwrap();
        assert_eq!(back.to_vec::<u8>().unwrap(), vec![1, 3, 2, 4]);
    }

    #[test]
    fn test_unknown_tag() {
        let t = Tensor::zeros(&[1], DType::F32, &Device::cpu()).unwrap();
        let mut buf = encode(&t);
        buf[8..12].copy_from_slice(&99u32.to_ne_bytes());
        let err = read_from(&mut Cursor::new(buf)).unwrap_err();
        assert!(matches!(err, Error::UnknownDTypeTag { tag: 99 }));
        assert!(err.is_io());
    }

    #[test]
    fn test_bool_payload_is_normalized() {
        let t = Tensor::from_bools(&[true, false, true], &[3], &Device::cpu()).unwrap();
        let mut buf = encode(&t);
        // Header is ndim, tag, size and one shape entry
        let payload = 8 + 4 + 8 + 8;
        buf[payload] = 2;
        buf[payload + 2] = 255;
        let back = read_from(&mut Cursor::new(buf)).unwrap();
        assert_eq!(back.to_vec::<u8>().unwrap(), vec![1, 0, 1]);

        let client = crate::runtime::cpu::CpuClient::new(Device::cpu());
        let eq = client.equal(&back, &t).unwrap();
        assert_eq!(eq.to_vec::<u8>().unwrap(), vec![1, 1, 1]);
    }

    #[test]
    fn test_short_payload() {
        let t = Tensor::zeros(&[4], DType::F64, &Device::cpu()).unwrap();
        let mut buf = encode(&t);
        buf.truncate(buf.len() - 3);
        match read_from(&mut Cursor::new(buf)) {
            Err(Error::Io { source, .. }) => assert_eq!(source.kind(), ErrorKind::UnexpectedEof),
            other => panic!("expected short read, got {:?}", other),
        }
    }

    #[test]
    fn test_size_must_match_shape() {
        let t = Tensor::zeros(&[2, 2], DType::U8, &Device::cpu()).unwrap();
        let mut buf = encode(&t);
        buf[12..20].copy_from_slice(&5u64.to_ne_bytes());
        assert!(matches!(
            read_from(&mut Cursor::new(buf)),
            Err(Error::ShapeMismatch { .. })
        ));
    }
}
