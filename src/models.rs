use chrono::NaiveDateTime;
use crate::schema::{outbox, outbox_multipart};

/// Gammu's only accepted coding for injected text.
pub const CODING_NO_COMPRESSION: &str = "Default_No_Compression";

#[derive(Insertable, Debug, Clone, PartialEq)]
#[table_name="outbox"]
pub struct NewOutbox<'a> {
    pub udh: &'a str,
    pub text_decoded: &'a str,
    pub coding: &'a str,
    pub class: i32,
    pub creator_id: &'a str,
    pub multi_part: bool,
    pub destination_number: &'a str,
    pub priority: i32,
    pub insert_into_db: NaiveDateTime,
    pub sending_date_time: NaiveDateTime
}
#[derive(Insertable, Debug, Clone, PartialEq)]
#[table_name="outbox_multipart"]
pub struct NewOutboxMultipart<'a> {
    pub udh: &'a str,
    pub text_decoded: &'a str,
    pub coding: &'a str,
    pub class: i32,
    pub sequence_position: i32,
    pub id: i32
}
