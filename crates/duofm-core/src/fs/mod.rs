//! File system abstractions for DuoFM.
//!
//! This module provides the directory-entry type ([`entry::FileEntry`]) and
//! the asynchronous directory service ([`service::DirectoryService`] and its
//! OS-backed implementation [`service::OsDirectoryService`]).

pub mod entry;
pub mod service;
