use super::{DoctorReport, SnapshotStore};
use crate::error::{Result, RoloError};
use crate::model::{Contact, EMAIL_WIDTH, GROUP_WIDTH, NAME_WIDTH, PHONE_WIDTH};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Total size of one on-disk record.
pub const RECORD_LEN: usize = NAME_WIDTH + PHONE_WIDTH + EMAIL_WIDTH + GROUP_WIDTH;

const DEFAULT_DATA_FILE: &str = "contacts.dat";

pub struct FileStore {
    root: PathBuf,
    data_file: String,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }

    pub fn with_data_file(mut self, name: &str) -> Self {
        self.data_file = name.to_string();
        self
    }

    pub fn path(&self) -> PathBuf {
        self.root.join(&self.data_file)
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(RoloError::Io)?;
        }
        Ok(())
    }

    fn read_bytes(&self) -> Result<Vec<u8>> {
        match fs::read(self.path()) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(RoloError::Io(e)),
        }
    }
}

fn put_field(buf: &mut Vec<u8>, value: &str, width: usize) {
    let bytes = value.as_bytes();
    // Contact::new clamps to width - 1, leaving room for the NUL
    debug_assert!(bytes.len() < width);
    let take = bytes.len().min(width - 1);
    buf.extend_from_slice(&bytes[..take]);
    buf.resize(buf.len() + (width - take), 0);
}

fn take_field(block: &[u8], offset: usize, width: usize) -> String {
    let field = &block[offset..offset + width];
    let end = field.iter().position(|&b| b == 0).unwrap_or(width);
    String::from_utf8_lossy(&field[..end]).into_owned()
}

/// Encode one contact as a fixed-size block, each field NUL-padded to its
/// width.
pub fn encode_record(contact: &Contact) -> Vec<u8> {
    let mut buf = Vec::with_capacity(RECORD_LEN);
    put_field(&mut buf, &contact.name, NAME_WIDTH);
    put_field(&mut buf, &contact.phone, PHONE_WIDTH);
    put_field(&mut buf, &contact.email, EMAIL_WIDTH);
    put_field(&mut buf, &contact.group, GROUP_WIDTH);
    buf
}

/// Decode one fixed-size block. Goes through `Contact::new` so records from
/// foreign files still end up within bounds.
pub fn decode_record(block: &[u8]) -> Contact {
    Contact::new(
        take_field(block, 0, NAME_WIDTH),
        take_field(block, NAME_WIDTH, PHONE_WIDTH),
        take_field(block, NAME_WIDTH + PHONE_WIDTH, EMAIL_WIDTH),
        take_field(block, NAME_WIDTH + PHONE_WIDTH + EMAIL_WIDTH, GROUP_WIDTH),
    )
}

impl SnapshotStore for FileStore {
    fn load(&self) -> Result<Vec<Contact>> {
        // chunks_exact drops a partial trailing block
        let bytes = self.read_bytes()?;
        Ok(bytes.chunks_exact(RECORD_LEN).map(decode_record).collect())
    }

    fn save(&mut self, contacts: &[Contact]) -> Result<()> {
        self.ensure_dir()?;
        let mut buf = Vec::with_capacity(contacts.len() * RECORD_LEN);
        for contact in contacts {
            buf.extend_from_slice(&encode_record(contact));
        }
        fs::write(self.path(), buf).map_err(RoloError::Io)
    }

    fn doctor(&mut self) -> Result<DoctorReport> {
        let bytes = self.read_bytes()?;
        let whole_records = bytes.len() / RECORD_LEN;
        let trailing = bytes.len() % RECORD_LEN;

        if trailing > 0 {
            fs::write(self.path(), &bytes[..whole_records * RECORD_LEN])
                .map_err(RoloError::Io)?;
        }

        Ok(DoctorReport {
            whole_records,
            trailing_bytes_dropped: trailing,
        })
    }

    fn data_path(&self) -> Option<PathBuf> {
        Some(self.path())
    }
}
