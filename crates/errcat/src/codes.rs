//! The driver error catalog.
//!
//! One variant per failure condition the driver binding can report. The
//! discriminant is the stable identifier callers pass to the formatter; the
//! `code` is the published `NJS-nnn` number users see and search for.
//! Published numbers have gaps (retired conditions are never reused), while
//! identifiers are dense.
//!
//! New conditions are appended at the end with the next identifier and a new
//! display code. Existing entries are never renumbered.
//!
//! `NJS-000` is reserved for success ([`SUCCESS`](crate::SUCCESS)) and has
//! no entry.

use std::fmt::{self, Display, Formatter};

use crate::{Catalog, ErrorCatalog};

/// Every error the driver binding reports, keyed by stable identifier.
///
/// Argument lists are given by the placeholders in each message, in order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ErrorCatalog)]
#[catalog(prefix = "NJS")]
#[repr(i32)]
pub enum ErrorCode {
    /// An asynchronous API was called without a trailing callback.
    #[message(code = 1, "expected callback as last parameter")]
    MissingCallback = 1,

    #[message(code = 2, "invalid pool")]
    InvalidPool = 2,

    #[message(code = 3, "invalid connection")]
    InvalidConnection = 3,

    /// Args: property name.
    #[message(code = 4, "invalid value for property {property:str}")]
    InvalidPropertyValue = 4,

    /// Args: one-based parameter position.
    #[message(code = 5, "invalid value for parameter {position:int}")]
    InvalidParameterValue = 5,

    /// Args: property name, one-based parameter position.
    #[message(code = 7, "invalid value for \"{property:str}\" in parameter {position:int}")]
    InvalidPropertyValueInParam = 6,

    #[message(code = 9, "invalid number of parameters")]
    InvalidNumberOfParameters = 7,

    /// Args: database type number, one-based column.
    #[message(code = 10, "unsupported data type {data_type:int} in column {column:uint}")]
    UnsupportedDataType = 8,

    #[message(code = 11, "encountered bind value and type mismatch")]
    BindValueAndTypeMismatch = 9,

    #[message(code = 12, "encountered invalid bind data type in parameter {position:int}")]
    InvalidBindDataType = 10,

    #[message(code = 13, "invalid bind direction")]
    InvalidBindDirection = 11,

    #[message(code = 15, "type was not specified for conversion")]
    NoTypeForConversion = 12,

    #[message(code = 16, "buffer is too small for OUT binds")]
    InsufficientBufferForBinds = 13,

    #[message(code = 17, "concurrent operations on ResultSet are not allowed")]
    BusyResultSet = 14,

    #[message(code = 18, "invalid ResultSet")]
    InvalidResultSet = 15,

    #[message(code = 19, "ResultSet cannot be returned for non-query statements")]
    InvalidNonQueryExecution = 16,

    #[message(code = 21, "invalid type for conversion specified")]
    InvalidTypeForConversion = 17,

    #[message(code = 22, "invalid Lob")]
    InvalidLob = 18,

    #[message(code = 23, "concurrent operations on LOB are not allowed")]
    BusyLob = 19,

    #[message(code = 24, "memory allocation failed")]
    InsufficientMemory = 20,

    #[message(code = 34, "data type is unsupported for array bind")]
    InvalidTypeForArrayBind = 21,

    #[message(code = 35, "maxArraySize is required for IN OUT array bind")]
    ReqdMaxArraySize = 22,

    #[message(code = 36, "given array is of size greater than maxArraySize")]
    InvalidArraySize = 23,

    /// Args: array index, bind name (without the leading colon).
    #[message(code = 37, "invalid data type at array index {index:int} for bind \":{bind:substr}\"")]
    IncompatibleTypeArrayBind = 24,

    /// Args: the pool's queue timeout.
    #[message(
        code = 40,
        "connection request timeout. Request exceeded queueTimeout of {timeout:int}"
    )]
    ConnRequestTimeout = 25,

    #[message(code = 41, "cannot convert ResultSet to QueryStream after invoking methods")]
    CannotConvertRsToStream = 26,

    #[message(code = 42, "cannot invoke ResultSet methods after converting to QueryStream")]
    CannotInvokeRsMethods = 27,

    #[message(code = 43, "ResultSet already converted to QueryStream")]
    ResultSetAlreadyConverted = 28,

    #[message(code = 44, "named JSON object is not expected in this context")]
    NamedJson = 29,

    /// Args: runtime version string.
    #[message(code = 45, "cannot load a node-oracledb binary for Node.js {version:str}")]
    CannotLoadBinary = 30,

    #[message(
        code = 46,
        "pool alias \"{alias:str}\" already exists in the connection pool cache"
    )]
    PoolWithAliasAlreadyExists = 31,

    #[message(code = 47, "pool alias \"{alias:str}\" not found in connection pool cache")]
    PoolWithAliasNotFound = 32,

    #[message(
        code = 52,
        "invalid data type at array index {index:int} for bind position {position:int}"
    )]
    IncompatibleTypeArrayIndexBind = 33,

    #[message(code = 53, "array value expected, a non-array value provided")]
    NonArrayProvided = 34,

    #[message(code = 55, "binding by position and name cannot be mixed")]
    MixedBind = 35,

    #[message(
        code = 56,
        "maxSize must be specified and not zero for bind position {position:uint}"
    )]
    MissingMaxSizeByPos = 36,

    #[message(code = 57, "maxSize must be specified and not zero for bind \"{bind:substr}\"")]
    MissingMaxSizeByName = 37,

    /// Args: declared maxSize, actual value length, one-based row.
    #[message(
        code = 58,
        "maxSize of {max_size:uint} is too small for value of length {length:uint} in row {row:uint}"
    )]
    MaxSizeTooSmall = 38,

    #[message(code = 59, "type must be specified for bind position {position:uint}")]
    MissingTypeByPos = 39,

    #[message(code = 60, "type must be specified for bind \"{bind:substr}\"")]
    MissingTypeByName = 40,

    #[message(code = 61, "invalid subscription")]
    InvalidSubscription = 41,

    #[message(code = 62, "subscription notification callback missing")]
    MissingSubscrCallback = 42,

    #[message(code = 63, "subscription notification SQL missing")]
    MissingSubscrSql = 43,

    #[message(code = 64, "connection pool is closing")]
    PoolClosing = 44,

    #[message(code = 65, "connection pool was closed")]
    PoolClosed = 45,

    #[message(code = 66, "invalid SODA document cursor")]
    InvalidSodaDocCursor = 46,

    /// Args: platform/architecture/ABI description.
    #[message(code = 67, "a pre-built node-oracledb binary was not found for {platform:str}")]
    NoBinaryAvailable = 47,

    /// Rendered in place of any identifier outside the catalog.
    ///
    /// Args: the offending identifier.
    #[fallback]
    #[message(code = 68, "invalid error number {id:int} supplied")]
    InvalidErrNum = 48,

    /// Args: driver version, minimum runtime version.
    #[message(code = 69, "node-oracledb {driver_version:str} requires Node.js {required:str} or later")]
    NodeTooOld = 49,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
