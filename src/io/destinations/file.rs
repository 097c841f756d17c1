use crate::io::traits::Destination;
use std::fs::File as StdFile;
use std::io::Write;

/// A sink that streams dump output straight to a file on disk.
pub struct File {
    file: StdFile,
    path: String,
    bytes_written: usize,
}

impl File {
    pub fn create(path: &str) -> std::io::Result<Self> {
        Ok(Self {
            file: StdFile::create(path)?,
            path: path.to_string(),
            bytes_written: 0,
        })
    }

    pub fn bytes_written(&self) -> usize {
        self.bytes_written
    }
}

impl Destination for File {
    fn add_byte(&mut self, byte: u8) {
        self.file.write_all(&[byte]).expect("write to destination file");
        self.bytes_written += 1;
    }

    fn add_bytes(&mut self, bytes: &str) {
        self.file.write_all(bytes.as_bytes()).expect("write to destination file");
        self.bytes_written += bytes.len();
    }

    fn clear(&mut self) {
        self.file = StdFile::create(&self.path).expect("truncate destination file");
        self.bytes_written = 0;
    }
}
