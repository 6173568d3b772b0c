//! Mapping of SFTP failures onto `RemoteError`

use russh_sftp::client::error::Error as SftpError;
use russh_sftp::protocol::StatusCode;

use crate::domain::ports::{RemoteError, RemoteErrorKind, RemoteOp};
use crate::domain::value_objects::RemotePath;

pub fn kind_from_status(code: &StatusCode) -> RemoteErrorKind {
    match code {
        StatusCode::NoSuchFile => RemoteErrorKind::NotFound,
        StatusCode::PermissionDenied => RemoteErrorKind::PermissionDenied,
        _ => RemoteErrorKind::Failure,
    }
}

pub fn map_sftp_error(op: RemoteOp, path: &RemotePath, err: SftpError) -> RemoteError {
    match err {
        SftpError::Status(status) => RemoteError::new(
            op,
            path.clone(),
            kind_from_status(&status.status_code),
            status.error_message,
        ),
        other => RemoteError::failure(op, path.clone(), other.to_string()),
    }
}
