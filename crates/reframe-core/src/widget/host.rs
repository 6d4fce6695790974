use serde::{Deserialize, Serialize};

use crate::io::encode::ExportResult;

/// Callback the host registers to learn that new outputs can be pulled.
pub trait OutputNotifier {
    fn output_changed(&self);
}

impl<F: Fn()> OutputNotifier for F {
    fn output_changed(&self) {
        self()
    }
}

/// Primitive output values handed to the host.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetOutputs {
    pub data_uri: String,
    pub width: u32,
    pub height: u32,
    pub file_name: String,
}

impl From<&ExportResult> for WidgetOutputs {
    fn from(result: &ExportResult) -> Self {
        Self {
            data_uri: result.data_uri.clone(),
            width: result.width,
            height: result.height,
            file_name: result.file_name.clone(),
        }
    }
}
