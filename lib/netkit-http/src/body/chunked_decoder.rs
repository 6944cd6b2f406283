/*
 * SPDX-License-Identifier: Apache-2.0
 * Copyright 2025-2026 netkit contributors
 */

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use tokio::io::{AsyncBufRead, AsyncRead, ReadBuf};

fn invalid_data(msg: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, msg)
}

fn unexpected_eof(msg: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::UnexpectedEof, msg)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum DecodeStep {
    ChunkSize,
    ChunkData,
    ChunkDataEnd,
    Trailer,
    Finished,
}

/// Resumable record of one in-flight chunked body read.
///
/// The poll based reader suspends here whenever the underlying stream runs
/// dry and resumes on the next poll with the partial framing line and the
/// chunk byte counts intact.
pub struct BufferedReadState {
    line_max_size: usize,
    step: DecodeStep,
    line: Vec<u8>,
    this_chunk_size: u64,
    left_chunk_size: u64,
    seen_cr: bool,
}

impl BufferedReadState {
    pub fn new(line_max_size: usize) -> Self {
        BufferedReadState {
            line_max_size,
            step: DecodeStep::ChunkSize,
            line: Vec::with_capacity(32),
            this_chunk_size: 0,
            left_chunk_size: 0,
            seen_cr: false,
        }
    }

    /// Size of the chunk currently being decoded.
    #[inline]
    pub fn this_chunk_size(&self) -> u64 {
        self.this_chunk_size
    }

    /// Bytes of the current chunk not yet handed to the caller.
    #[inline]
    pub fn left_chunk_size(&self) -> u64 {
        self.left_chunk_size
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.step == DecodeStep::Finished
    }

    fn take_size_line(&mut self) -> io::Result<()> {
        let mut line = self.line.as_slice();
        if line.ends_with(b"\n") {
            line = &line[..line.len() - 1];
        }
        if line.ends_with(b"\r") {
            line = &line[..line.len() - 1];
        }
        // drop any chunk extension
        let size_part = match memchr::memchr(b';', line) {
            Some(i) => &line[..i],
            None => line,
        };
        let size_str = std::str::from_utf8(size_part)
            .map_err(|_| invalid_data("invalid chunk size line"))?
            .trim();
        let size = u64::from_str_radix(size_str, 16)
            .map_err(|_| invalid_data("invalid chunk size value"))?;
        self.line.clear();
        self.this_chunk_size = size;
        self.left_chunk_size = size;
        self.step = if size == 0 {
            DecodeStep::Trailer
        } else {
            DecodeStep::ChunkData
        };
        Ok(())
    }

    fn take_trailer_line(&mut self) {
        let blank = matches!(self.line.as_slice(), b"\n" | b"\r\n");
        self.line.clear();
        if blank {
            self.step = DecodeStep::Finished;
        }
    }

    fn poll_decode<R>(
        &mut self,
        cx: &mut Context<'_>,
        mut reader: Pin<&mut R>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>>
    where
        R: AsyncBufRead + Unpin,
    {
        loop {
            match self.step {
                DecodeStep::Finished => return Poll::Ready(Ok(())),
                DecodeStep::ChunkSize | DecodeStep::Trailer => {
                    let r_buf = ready!(reader.as_mut().poll_fill_buf(cx))?;
                    if r_buf.is_empty() {
                        return Poll::Ready(Err(unexpected_eof(
                            "reader closed while reading chunk framing line",
                        )));
                    }
                    match memchr::memchr(b'\n', r_buf) {
                        Some(i) => {
                            if self.line.len() + i + 1 > self.line_max_size {
                                return Poll::Ready(Err(invalid_data("framing line too long")));
                            }
                            self.line.extend_from_slice(&r_buf[..=i]);
                            reader.as_mut().consume(i + 1);
                            if self.step == DecodeStep::ChunkSize {
                                self.take_size_line()?;
                            } else {
                                self.take_trailer_line();
                            }
                        }
                        None => {
                            let len = r_buf.len();
                            if self.line.len() + len > self.line_max_size {
                                return Poll::Ready(Err(invalid_data("framing line too long")));
                            }
                            self.line.extend_from_slice(r_buf);
                            reader.as_mut().consume(len);
                        }
                    }
                }
                DecodeStep::ChunkData => {
                    if buf.remaining() == 0 {
                        return Poll::Ready(Ok(()));
                    }
                    let r_buf = ready!(reader.as_mut().poll_fill_buf(cx))?;
                    if r_buf.is_empty() {
                        return Poll::Ready(Err(unexpected_eof(
                            "reader closed while reading chunk data",
                        )));
                    }
                    let left = usize::try_from(self.left_chunk_size).unwrap_or(usize::MAX);
                    let nr = r_buf.len().min(buf.remaining()).min(left);
                    buf.put_slice(&r_buf[..nr]);
                    reader.as_mut().consume(nr);
                    self.left_chunk_size -= nr as u64;
                    if self.left_chunk_size == 0 {
                        self.step = DecodeStep::ChunkDataEnd;
                    }
                    // hand back what is decoded so far, more on the next poll
                    return Poll::Ready(Ok(()));
                }
                DecodeStep::ChunkDataEnd => {
                    let r_buf = ready!(reader.as_mut().poll_fill_buf(cx))?;
                    if r_buf.is_empty() {
                        return Poll::Ready(Err(unexpected_eof(
                            "reader closed while reading chunk data end",
                        )));
                    }
                    match r_buf[0] {
                        b'\r' if !self.seen_cr => {
                            reader.as_mut().consume(1);
                            self.seen_cr = true;
                        }
                        b'\n' => {
                            reader.as_mut().consume(1);
                            self.seen_cr = false;
                            self.step = DecodeStep::ChunkSize;
                        }
                        _ => {
                            return Poll::Ready(Err(invalid_data("no line end after chunk data")));
                        }
                    }
                }
            }
        }
    }
}

/// Decode a `Transfer-Encoding: chunked` body from a buffered stream.
///
/// Trailer section lines are consumed and discarded. After the body ends,
/// reads return zero bytes and [`finished`](BufferedReadState::finished)
/// turns true, with the underlying reader positioned after the final CRLF.
pub struct ChunkedDecodeReader<R> {
    reader: R,
    state: BufferedReadState,
}

impl<R> ChunkedDecodeReader<R> {
    pub fn new(reader: R, line_max_size: usize) -> Self {
        ChunkedDecodeReader {
            reader,
            state: BufferedReadState::new(line_max_size),
        }
    }

    #[inline]
    pub fn finished(&self) -> bool {
        self.state.finished()
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R> AsyncRead for ChunkedDecodeReader<R>
where
    R: AsyncBufRead + Unpin,
{
    fn poll_read(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &mut ReadBuf<'_>,
    ) -> Poll<io::Result<()>> {
        let me = self.get_mut();
        me.state.poll_decode(cx, Pin::new(&mut me.reader), buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    async fn decode_all(data: &[u8]) -> io::Result<Vec<u8>> {
        let mut reader = ChunkedDecodeReader::new(data, 1024);
        let mut body = Vec::new();
        reader.read_to_end(&mut body).await?;
        assert!(reader.finished());
        Ok(body)
    }

    #[tokio::test]
    async fn multiple_chunks() {
        let body = decode_all(b"4\r\nWiki\r\n5\r\npedia\r\n0\r\n\r\n")
            .await
            .unwrap();
        assert_eq!(body, b"Wikipedia");
    }

    #[tokio::test]
    async fn chunk_extension_ignored() {
        let body = decode_all(b"4;name=value\r\nWiki\r\n0\r\n\r\n").await.unwrap();
        assert_eq!(body, b"Wiki");
    }

    #[tokio::test]
    async fn trailer_section_discarded() {
        let body = decode_all(b"4\r\nWiki\r\n0\r\nExpires: never\r\n\r\n")
            .await
            .unwrap();
        assert_eq!(body, b"Wiki");
    }

    #[tokio::test]
    async fn bare_lf_accepted() {
        let body = decode_all(b"4\nWiki\n0\n\n").await.unwrap();
        assert_eq!(body, b"Wiki");
    }

    #[tokio::test]
    async fn truncated_chunk_data() {
        let err = decode_all(b"4\r\nWi").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn truncated_framing_line() {
        let err = decode_all(b"4\r\nWiki\r\n0\r\n").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[tokio::test]
    async fn invalid_chunk_size() {
        let err = decode_all(b"zz\r\nWiki\r\n0\r\n\r\n").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn missing_chunk_data_end() {
        let err = decode_all(b"4\r\nWikipedia\r\n0\r\n\r\n").await.unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }

    #[tokio::test]
    async fn read_in_small_steps() {
        let data: &[u8] = b"6\r\nchunky\r\n0\r\n\r\n";
        let mut reader = ChunkedDecodeReader::new(data, 1024);
        let mut body = Vec::new();
        let mut buf = [0u8; 2];
        loop {
            let nr = reader.read(&mut buf).await.unwrap();
            if nr == 0 {
                break;
            }
            body.extend_from_slice(&buf[..nr]);
        }
        assert_eq!(body, b"chunky");
        assert!(reader.finished());
    }
}
