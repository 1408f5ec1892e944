//! JSON key file credential source: `{ "api_key": "..." }`.

use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;

use mentor_types::error::CredentialError;

#[derive(Deserialize)]
struct KeyFile {
    api_key: Option<String>,
}

/// Read and parse the key file.
///
/// Returns `Ok(None)` when the file does not exist so the caller can report
/// every source it tried.
pub async fn read_key_file(path: &Path) -> Result<Option<SecretString>, CredentialError> {
    let display = path.display().to_string();

    let content = match tokio::fs::read_to_string(path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(CredentialError::Unreadable {
                path: display,
                message: err.to_string(),
            });
        }
    };

    let parsed: KeyFile =
        serde_json::from_str(&content).map_err(|e| CredentialError::Malformed {
            path: display.clone(),
            message: e.to_string(),
        })?;

    let key = parsed.api_key.ok_or_else(|| CredentialError::Malformed {
        path: display.clone(),
        message: "missing field `api_key`".to_string(),
    })?;

    if key.trim().is_empty() {
        return Err(CredentialError::Empty { source_name: display });
    }

    Ok(Some(SecretString::from(key.trim().to_string())))
}
