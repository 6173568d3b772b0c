//! Blocking SFTP session
//!
//! The engine is synchronous, so the async SSH stack runs on a private
//! current-thread runtime and every primitive is a `block_on` call.

use std::path::Path;
use std::sync::Arc;

use russh::client::{self, Handle};
use russh::Disconnect;
use russh_sftp::client::fs::Metadata;
use russh_sftp::client::SftpSession as SftpChannel;
use russh_sftp::protocol::StatusCode;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::runtime::{Builder, Runtime};

use crate::config::SessionConfig;
use crate::domain::ports::{
    RemoteError, RemoteErrorKind, RemoteOp, RemoteResult, RemoteSession,
};
use crate::domain::value_objects::{NodeKind, RemotePath};

use super::errors::map_sftp_error;
use super::host_key::HostKeyCheck;

/// Authenticated SFTP session
///
/// Closed explicitly with [`SftpSession::close`], or on drop.
pub struct SftpSession {
    runtime: Runtime,
    handle: Handle<HostKeyCheck>,
    sftp: SftpChannel,
    closed: bool,
}

fn connect_error(config: &SessionConfig, kind: RemoteErrorKind, message: impl Into<String>) -> RemoteError {
    RemoteError::new(
        RemoteOp::Connect,
        format!("{}:{}", config.host, config.port),
        kind,
        message,
    )
}

fn kind_from_metadata(metadata: &Metadata) -> NodeKind {
    if metadata.is_symlink() {
        NodeKind::Symlink
    } else if metadata.is_dir() {
        NodeKind::Directory
    } else {
        NodeKind::File
    }
}

fn is_no_such_file(err: &russh_sftp::client::error::Error) -> bool {
    matches!(
        err,
        russh_sftp::client::error::Error::Status(status)
            if matches!(status.status_code, StatusCode::NoSuchFile)
    )
}

impl SftpSession {
    /// Connect, authenticate with a password and open the SFTP subsystem
    pub fn connect(config: &SessionConfig) -> RemoteResult<Self> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| connect_error(config, RemoteErrorKind::Failure, e.to_string()))?;

        let (handle, sftp) = runtime.block_on(Self::open(config))?;
        Ok(Self {
            runtime,
            handle,
            sftp,
            closed: false,
        })
    }

    async fn open(config: &SessionConfig) -> RemoteResult<(Handle<HostKeyCheck>, SftpChannel)> {
        let failure = |e: russh::Error| connect_error(config, RemoteErrorKind::Failure, e.to_string());

        let stream = TcpStream::connect((config.host.as_str(), config.port))
            .await
            .map_err(|e| connect_error(config, RemoteErrorKind::Failure, e.to_string()))?;

        let ssh_config = Arc::new(client::Config::default());
        let check = HostKeyCheck::new(config.host_fingerprint.clone());
        let mut handle = client::connect_stream(ssh_config, stream, check)
            .await
            .map_err(failure)?;

        let auth = handle
            .authenticate_password(config.username.clone(), config.password.clone())
            .await
            .map_err(failure)?;
        if !auth.success() {
            return Err(connect_error(
                config,
                RemoteErrorKind::PermissionDenied,
                format!("password authentication rejected for {}", config.username),
            ));
        }

        let channel = handle.channel_open_session().await.map_err(failure)?;
        channel
            .request_subsystem(true, "sftp")
            .await
            .map_err(failure)?;
        let sftp = SftpChannel::new(channel.into_stream())
            .await
            .map_err(|e| connect_error(config, RemoteErrorKind::Failure, e.to_string()))?;

        Ok((handle, sftp))
    }

    /// Close the SFTP channel and disconnect; idempotent
    pub fn close(&mut self) -> RemoteResult<()> {
        if self.closed {
            return Ok(());
        }
        self.closed = true;

        let root = RemotePath::root();
        let sftp = &self.sftp;
        let handle = &self.handle;
        self.runtime.block_on(async {
            let closed = sftp
                .close()
                .await
                .map_err(|e| map_sftp_error(RemoteOp::Connect, &root, e));
            let _ = handle
                .disconnect(Disconnect::ByApplication, "", "en")
                .await;
            closed
        })
    }

    fn kind_of(&self, op: RemoteOp, path: &RemotePath) -> RemoteResult<NodeKind> {
        let result = self.runtime.block_on(async {
            match op {
                RemoteOp::Lstat => self.sftp.symlink_metadata(path.as_str()).await,
                _ => self.sftp.metadata(path.as_str()).await,
            }
        });
        match result {
            Ok(metadata) => Ok(kind_from_metadata(&metadata)),
            Err(err) if is_no_such_file(&err) => Ok(NodeKind::Missing),
            Err(err) => Err(map_sftp_error(op, path, err)),
        }
    }
}

impl RemoteSession for SftpSession {
    fn stat(&self, path: &RemotePath) -> RemoteResult<NodeKind> {
        self.kind_of(RemoteOp::Stat, path)
    }

    fn lstat(&self, path: &RemotePath) -> RemoteResult<NodeKind> {
        self.kind_of(RemoteOp::Lstat, path)
    }

    fn read_link(&self, path: &RemotePath) -> RemoteResult<String> {
        self.runtime
            .block_on(self.sftp.read_link(path.as_str()))
            .map_err(|e| map_sftp_error(RemoteOp::ReadLink, path, e))
    }

    fn make_dir(&self, path: &RemotePath) -> RemoteResult<()> {
        self.runtime
            .block_on(self.sftp.create_dir(path.as_str()))
            .map_err(|e| map_sftp_error(RemoteOp::MakeDir, path, e))
    }

    fn remove_dir(&self, path: &RemotePath) -> RemoteResult<()> {
        self.runtime
            .block_on(self.sftp.remove_dir(path.as_str()))
            .map_err(|e| map_sftp_error(RemoteOp::RemoveDir, path, e))
    }

    fn remove_file(&self, path: &RemotePath) -> RemoteResult<()> {
        self.runtime
            .block_on(self.sftp.remove_file(path.as_str()))
            .map_err(|e| map_sftp_error(RemoteOp::RemoveFile, path, e))
    }

    fn list_dir(&self, path: &RemotePath) -> RemoteResult<Vec<String>> {
        let entries = self
            .runtime
            .block_on(self.sftp.read_dir(path.as_str()))
            .map_err(|e| map_sftp_error(RemoteOp::ListDir, path, e))?;

        Ok(entries
            .map(|entry| entry.file_name())
            .filter(|name| name != "." && name != "..")
            .collect())
    }

    fn upload_file(&self, local: &Path, remote: &RemotePath) -> RemoteResult<()> {
        let local_error =
            |e: std::io::Error| RemoteError::failure(RemoteOp::Upload, remote.clone(), e.to_string());

        self.runtime.block_on(async {
            let mut source = tokio::fs::File::open(local).await.map_err(local_error)?;
            let mut dest = self
                .sftp
                .create(remote.as_str())
                .await
                .map_err(|e| map_sftp_error(RemoteOp::Upload, remote, e))?;
            tokio::io::copy(&mut source, &mut dest)
                .await
                .map_err(local_error)?;
            dest.shutdown().await.map_err(local_error)
        })
    }
}

impl Drop for SftpSession {
    fn drop(&mut self) {
        let _ = self.close();
    }
}
