//! Gammu SMSD outbox tables (PostgreSQL flavour).
//!
//! Gammu owns these tables and creates them with quoted CamelCase column
//! names, hence the `sql_name` attributes.

table! {
    outbox (id) {
        #[sql_name = "ID"]
        id -> Int4,
        #[sql_name = "UDH"]
        udh -> Text,
        #[sql_name = "TextDecoded"]
        text_decoded -> Text,
        #[sql_name = "Coding"]
        coding -> Varchar,
        #[sql_name = "Class"]
        class -> Int4,
        #[sql_name = "CreatorID"]
        creator_id -> Text,
        #[sql_name = "MultiPart"]
        multi_part -> Bool,
        #[sql_name = "DestinationNumber"]
        destination_number -> Varchar,
        #[sql_name = "Priority"]
        priority -> Int4,
        #[sql_name = "InsertIntoDB"]
        insert_into_db -> Timestamp,
        #[sql_name = "SendingDateTime"]
        sending_date_time -> Timestamp,
    }
}

table! {
    outbox_multipart (id, sequence_position) {
        #[sql_name = "ID"]
        id -> Int4,
        #[sql_name = "UDH"]
        udh -> Text,
        #[sql_name = "TextDecoded"]
        text_decoded -> Text,
        #[sql_name = "Coding"]
        coding -> Varchar,
        #[sql_name = "Class"]
        class -> Int4,
        #[sql_name = "SequencePosition"]
        sequence_position -> Int4,
    }
}
joinable!(outbox_multipart -> outbox (id));
allow_tables_to_appear_in_same_query!(outbox, outbox_multipart);
