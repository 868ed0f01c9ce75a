use huffnpuff::{decode, encode, CodeTable, EncodedPayload, SerializableCodeTable};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::hash::Hash;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

/// Self-contained archive: the payload plus the code table needed to decode
/// it, so the file alone is enough to get the input back.
#[derive(Serialize, Deserialize)]
struct Archive<Symbol>
where
    Symbol: Eq + Hash,
{
    payload: EncodedPayload,
    table: SerializableCodeTable<Symbol>,
}

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set up the global logger");

    let fp = env::args()
        .nth(1)
        .expect("Please provide path to input file as first argument.");

    let input_bytes = fs::read(fp).expect("First argument was not a valid filepath.");

    // encode scope - save to file
    {
        let (payload, table) = encode(&input_bytes).unwrap();
        let archive = Archive {
            payload,
            table: SerializableCodeTable::from(&table),
        };
        let data = rmp_serde::to_vec(&archive).unwrap();

        fs::write("encoded.mp", data).unwrap();
    }

    // decode scope - read from file
    {
        let file_data = fs::read("encoded.mp").unwrap();

        let archive: Archive<u8> = rmp_serde::from_slice(&file_data).unwrap();
        let table = CodeTable::from(archive.table);
        let decoded = decode(&archive.payload, &table).unwrap();

        fs::write("decoded.txt", decoded).unwrap();
    }
}
