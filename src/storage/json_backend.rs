use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::{
    fs::{self, File},
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::{
    errors::{LedgerError, Result},
    ledger::Ledger,
};

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";
const INDENT: &[u8] = b"    ";

/// Single-file JSON persistence for the ledger document.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for JsonStorage {
    fn load(&self) -> Result<Ledger> {
        let ledger = match load_ledger_from_path(&self.path)? {
            Some(ledger) => ledger,
            None => {
                debug!(path = %self.path.display(), "no ledger on disk, starting empty");
                return Ok(Ledger::default());
            }
        };
        debug!(
            path = %self.path.display(),
            transactions = ledger.transaction_count(),
            "ledger loaded"
        );
        if let Some(drift) = ledger.balance_drift() {
            warn!(
                path = %self.path.display(),
                cached = ledger.balance,
                derived = ledger.derived_balance(),
                drift,
                "stored balance does not match transaction log"
            );
        }
        Ok(ledger)
    }

    fn save(&self, ledger: &Ledger) -> Result<()> {
        save_ledger_to_path(ledger, &self.path)?;
        debug!(
            path = %self.path.display(),
            transactions = ledger.transaction_count(),
            "ledger saved"
        );
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

/// Reads a ledger from `path`, returning `None` when the file does not exist.
pub fn load_ledger_from_path(path: &Path) -> Result<Option<Ledger>> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(LedgerError::storage(path, err)),
    };
    let ledger = serde_json::from_str(&data).map_err(|err| LedgerError::storage(path, err))?;
    Ok(Some(ledger))
}

/// Writes the whole document next to `path` and renames it into place.
pub fn save_ledger_to_path(ledger: &Ledger, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|err| LedgerError::storage(parent, err))?;
    }
    let json = serialize_ledger(ledger)?;
    let tmp = tmp_path(path);
    write_atomic(&tmp, &json).map_err(|err| LedgerError::storage(&tmp, err))?;
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(LedgerError::storage(path, err));
    }
    Ok(())
}

fn serialize_ledger(ledger: &Ledger) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    ledger.serialize(&mut serializer)?;
    Ok(buffer)
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data)?;
    file.sync_all()?;
    Ok(())
}
