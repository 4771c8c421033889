pub mod broadcast;
pub mod error;
pub mod id;
pub mod normalize;
pub mod ops;
pub mod transpose;
pub mod traverse;
pub mod value;

pub use broadcast::{extend, map1, map2, map_n, wrap_extend};
pub use error::EngineError;
pub use id::IdAllocator;
pub use normalize::{bubble, flat, flatten, shape, unbubble};
pub use transpose::chunk::{Pairwise, cclump, clump, pairwise};
pub use transpose::expand::{expand_args, multichannel_expand_tuple};
pub use transpose::flop::{flop, flop_deep, flop_together};
pub use transpose::reduce::{list_max, list_min, list_sum};
pub use traverse::{
    Depth, deep_collect, max_depth, max_size_at_depth, reshape_like, wrap_at_depth,
};
pub use value::{Kind, Scalar, Value};

use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the multichannel-core version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

fn from_js<T: serde::de::DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&format!("{e}")))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: transpose an array of columns into rows.
#[wasm_bindgen]
pub fn flop_js(columns: JsValue) -> Result<JsValue, JsValue> {
    let columns: Vec<Value> = from_js(columns)?;
    to_js(&flop(&columns))
}

/// WASM-exposed: flop at a nesting rank (default: one above the deepest).
#[wasm_bindgen]
pub fn flop_deep_js(value: JsValue, rank: Option<u32>) -> Result<JsValue, JsValue> {
    let value: Value = from_js(value)?;
    to_js(&flop_deep(&value, rank.map(|r| r as usize)))
}

/// WASM-exposed: pour the values of `source` into the nesting of `template`.
#[wasm_bindgen]
pub fn reshape_like_js(source: JsValue, template: JsValue) -> Result<JsValue, JsValue> {
    let source: Value = from_js(source)?;
    let template: Value = from_js(template)?;
    let reshaped =
        reshape_like(&source, &template).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    to_js(&reshaped)
}

/// WASM-exposed: flatten any nesting into one array.
#[wasm_bindgen]
pub fn flat_js(value: JsValue) -> Result<JsValue, JsValue> {
    let value: Value = from_js(value)?;
    to_js(&flat(&value))
}

/// WASM-exposed: multichannel-expand an array treated as a tuple spec.
#[wasm_bindgen]
pub fn expand_tuple_js(spec: JsValue, rank: u32) -> Result<JsValue, JsValue> {
    let spec = match from_js::<Value>(spec)? {
        Value::Seq(_, items) => Value::tuple(items),
        scalar => scalar,
    };
    to_js(&multichannel_expand_tuple(&spec, rank as usize))
}
