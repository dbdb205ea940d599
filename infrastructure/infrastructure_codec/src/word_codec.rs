//! Word Codec Module
//!
//! Buffer-level merge and split built on [`Compose`].

use entities_integers::{Compose, LengthError, Word};

/// Word codec
pub struct WordCodec;

impl WordCodec {
    /// Merge narrow words into a caller-supplied buffer of wide words
    ///
    /// # Arguments
    /// * `source` - Narrow words; length must be a multiple of `W::RATIO`
    /// * `output` - Wide words; length must be exactly `source.len() / W::RATIO`
    ///
    /// # Returns
    /// * `Ok(())` - Every output word was written
    /// * `Err(LengthError)` - A length was rejected; `output` is untouched
    ///
    /// # Examples
    /// ```
    /// use infrastructure_codec::WordCodec;
    ///
    /// let mut words = [0u32; 1];
    /// WordCodec::merge_into(&[0x00u8, 0x01, 0x02, 0x03], &mut words).unwrap();
    /// assert_eq!(words, [0x0001_0203]);
    /// ```
    pub fn merge_into<N, W>(source: &[N], output: &mut [W]) -> Result<(), LengthError>
    where
        N: Word,
        W: Compose<N>,
    {
        let expected = merge_len::<N, W>(source.len())?;
        if output.len() != expected {
            return Err(LengthError::Mismatch {
                param: "output",
                expected,
                actual: output.len(),
            });
        }

        for (word, group) in output.iter_mut().zip(source.chunks_exact(W::RATIO)) {
            *word = W::compose(group);
        }
        Ok(())
    }

    /// Merge narrow words into a newly allocated buffer of wide words
    ///
    /// # Examples
    /// ```
    /// use infrastructure_codec::WordCodec;
    ///
    /// let words: Vec<u64> = WordCodec::merge(&[0xDEADDEADu32, 0xC0DEC0DE]).unwrap();
    /// assert_eq!(words, vec![0xDEADDEAD_C0DEC0DE]);
    /// ```
    pub fn merge<N, W>(source: &[N]) -> Result<Vec<W>, LengthError>
    where
        N: Word,
        W: Compose<N>,
    {
        let mut output = vec![W::ZERO; merge_len::<N, W>(source.len())?];
        Self::merge_into(source, &mut output)?;
        Ok(output)
    }

    /// Split wide words into a caller-supplied buffer of narrow words
    ///
    /// # Arguments
    /// * `source` - Wide words
    /// * `output` - Narrow words; length must be exactly `source.len() * W::RATIO`
    ///
    /// # Returns
    /// * `Ok(())` - Every output word was written
    /// * `Err(LengthError)` - A length was rejected; `output` is untouched
    pub fn split_into<W, N>(source: &[W], output: &mut [N]) -> Result<(), LengthError>
    where
        N: Word,
        W: Compose<N>,
    {
        let expected = split_len::<W, N>(source.len())?;
        if output.len() != expected {
            return Err(LengthError::Mismatch {
                param: "output",
                expected,
                actual: output.len(),
            });
        }

        for (word, group) in source.iter().zip(output.chunks_exact_mut(W::RATIO)) {
            word.decompose(group);
        }
        Ok(())
    }

    /// Split wide words into a newly allocated buffer of narrow words
    ///
    /// # Examples
    /// ```
    /// use infrastructure_codec::WordCodec;
    ///
    /// let bytes: Vec<u8> = WordCodec::split(&[0x0000_FFFFu32]).unwrap();
    /// assert_eq!(bytes, vec![0x00, 0x00, 0xFF, 0xFF]);
    /// ```
    pub fn split<W, N>(source: &[W]) -> Result<Vec<N>, LengthError>
    where
        N: Word,
        W: Compose<N>,
    {
        let mut output = vec![N::ZERO; split_len::<W, N>(source.len())?];
        Self::split_into(source, &mut output)?;
        Ok(output)
    }
}

fn merge_len<N, W>(len: usize) -> Result<usize, LengthError>
where
    N: Word,
    W: Compose<N>,
{
    if len % W::RATIO != 0 {
        return Err(LengthError::NotMultiple {
            param: "source",
            multiple_of: W::RATIO,
            actual: len,
        });
    }
    Ok(len / W::RATIO)
}

/// Number of narrow words produced by splitting `len` wide words
///
/// Fails with [`LengthError::TooLong`] when the result would exceed the
/// largest length a slice can have.
pub fn split_len<W, N>(len: usize) -> Result<usize, LengthError>
where
    N: Word,
    W: Compose<N>,
{
    let max = isize::MAX as usize / W::RATIO;
    if len > max {
        return Err(LengthError::TooLong {
            param: "source",
            max,
            actual: len,
        });
    }
    Ok(len * W::RATIO)
}
