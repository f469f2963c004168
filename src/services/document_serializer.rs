use chrono::SecondsFormat;
use mongodb::bson::{Bson, DateTime, Document};

const STORE_ID_FIELD: &str = "_id";
const PUBLIC_ID_FIELD: &str = "id";

pub fn to_iso8601(value: &DateTime) -> String {
    value
        .to_chrono()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Makes a stored document safe to hand out as JSON: `_id` becomes a plain
/// string `id`, and every date-time at any depth becomes ISO-8601 text.
/// The input is left untouched.
pub fn serialize_document(doc: &Document) -> Document {
    if doc.is_empty() {
        return doc.clone();
    }

    let mut out = doc.clone();
    if let Some(id) = out.remove(STORE_ID_FIELD) {
        out.insert(PUBLIC_ID_FIELD, id_to_string(id));
    }

    out.into_iter()
        .map(|(key, value)| (key, convert_value(value)))
        .collect()
}

fn id_to_string(id: Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s,
        other => other.to_string(),
    }
}

fn convert_value(value: Bson) -> Bson {
    match value {
        Bson::DateTime(dt) => Bson::String(to_iso8601(&dt)),
        Bson::Array(items) => Bson::Array(items.into_iter().map(convert_value).collect()),
        Bson::Document(nested) => Bson::Document(
            nested
                .into_iter()
                .map(|(key, value)| (key, convert_value(value)))
                .collect(),
        ),
        other => other,
    }
}
