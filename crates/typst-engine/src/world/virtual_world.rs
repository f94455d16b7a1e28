//! VirtualWorld implementation of the Typst World trait
//!
//! The world holds exactly one source file and no assets. Any other file
//! lookup fails, which keeps compilation sealed off from the host.

use std::collections::HashMap;

use chrono::{Datelike, Timelike, Utc};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Array, Bytes, Datetime, Dict, Value};
use typst::syntax::{FileId, Source, VirtualPath};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, World};

use super::fonts::{global_font_cache, FontCache};
use crate::compiler::errors::ServerError;

/// A virtual world for in-memory Typst compilation
pub struct VirtualWorld {
    /// The single mounted source (`/main.typ`)
    main: Source,
    /// Reference to the global font cache
    font_cache: &'static FontCache,
    /// Captured once so every `today()` call agrees
    time: chrono::DateTime<Utc>,
    /// Pre-hashed standard library
    library: LazyHash<Library>,
}

impl VirtualWorld {
    pub fn new(
        source: String,
        inputs: HashMap<String, serde_json::Value>,
    ) -> Result<Self, ServerError> {
        let id = FileId::new(None, VirtualPath::new("/main.typ"));
        let inputs = Self::convert_inputs(inputs)?;
        let library = Library::builder().with_inputs(inputs).build();

        Ok(Self {
            main: Source::new(id, source),
            font_cache: global_font_cache(),
            time: Utc::now(),
            library: LazyHash::new(library),
        })
    }

    fn convert_inputs(inputs: HashMap<String, serde_json::Value>) -> Result<Dict, ServerError> {
        let mut dict = Dict::new();

        for (key, value) in inputs {
            let typst_value = Self::json_to_typst_value(&value)?;
            dict.insert(key.into(), typst_value);
        }

        Ok(dict)
    }

    /// Convert a JSON value to a Typst Value
    fn json_to_typst_value(json: &serde_json::Value) -> Result<Value, ServerError> {
        match json {
            serde_json::Value::Null => Ok(Value::None),
            serde_json::Value::Bool(b) => Ok(Value::Bool(*b)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(ServerError::InvalidArgument(format!(
                        "Invalid number: {}",
                        n
                    )))
                }
            }
            serde_json::Value::String(s) => Ok(Value::Str(s.as_str().into())),
            serde_json::Value::Array(arr) => {
                let items: Vec<Value> = arr
                    .iter()
                    .map(Self::json_to_typst_value)
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Value::Array(Array::from(items.as_slice())))
            }
            serde_json::Value::Object(obj) => {
                let mut dict = Dict::new();
                for (k, v) in obj {
                    dict.insert(k.as_str().into(), Self::json_to_typst_value(v)?);
                }
                Ok(Value::Dict(dict))
            }
        }
    }
}

impl World for VirtualWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        self.font_cache.book()
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.font_cache.font(index)
    }

    fn today(&self, offset: Option<i64>) -> Option<Datetime> {
        let adjusted = self.time + chrono::Duration::hours(offset.unwrap_or(0));

        Datetime::from_ymd_hms(
            adjusted.year(),
            adjusted.month() as u8,
            adjusted.day() as u8,
            adjusted.hour() as u8,
            adjusted.minute() as u8,
            adjusted.second() as u8,
        )
    }
}
