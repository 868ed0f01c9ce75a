use huffnpuff::{decode, encode};

fn main() {
    let s = String::from("a man a plan a canal panama");
    let (payload, table) = encode(s.as_bytes()).unwrap();
    let decoded = decode(&payload, &table).unwrap();

    println!("{:?}", String::from_utf8(decoded));
    println!(
        "original: {} bytes, compressed: {} bytes (padding {})",
        s.len(),
        payload.to_bytes().len(),
        payload.padding(),
    );
}
