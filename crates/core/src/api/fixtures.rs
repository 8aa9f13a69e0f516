//! Canned PokeAPI bodies for seeding a [`MemoryTransport`](super::MemoryTransport).

use serde_json::{json, Value};

pub const BASE_URL: &str = "https://pokeapi.test/api/v2";

pub fn detail_url(name: &str) -> String {
    format!("{}/pokemon/{}", BASE_URL, name)
}

pub fn species_url(name: &str) -> String {
    format!("{}/pokemon-species/{}/", BASE_URL, name)
}

pub fn chain_url(id: u32) -> String {
    format!("{}/evolution-chain/{}/", BASE_URL, id)
}

pub fn artwork_url(id: u32) -> String {
    format!("https://img.pokeapi.test/official-artwork/{}.png", id)
}

/// `GET /pokemon?limit=&offset=` body over the given names
pub fn page(count: usize, names: &[&str]) -> Value {
    let results: Vec<Value> = names
        .iter()
        .map(|name| json!({ "name": name, "url": detail_url(name) }))
        .collect();
    json!({ "count": count, "next": null, "previous": null, "results": results })
}

/// `GET /pokemon/{name}` body
pub fn pokemon(id: u32, name: &str, types: &[&str], height_dm: u32, weight_hg: u32) -> Value {
    let types: Vec<Value> = types
        .iter()
        .enumerate()
        .map(|(slot, t)| json!({ "slot": slot + 1, "type": { "name": t, "url": "" } }))
        .collect();
    json!({
        "id": id,
        "name": name,
        "height": height_dm,
        "weight": weight_hg,
        "types": types,
        "abilities": [
            { "ability": { "name": "static", "url": "" }, "is_hidden": false },
            { "ability": { "name": "lightning-rod", "url": "" }, "is_hidden": true }
        ],
        "sprites": {
            "front_default": null,
            "other": { "official-artwork": { "front_default": artwork_url(id) } }
        },
        "species": { "name": name, "url": species_url(name) }
    })
}

/// `GET <species.url>` body
pub fn species(chain_id: u32) -> Value {
    json!({ "evolution_chain": { "url": chain_url(chain_id) } })
}

/// `GET <evolution_chain.url>` body for a single-branch chain, root first
pub fn linear_chain(names: &[&str]) -> Value {
    let mut link: Option<Value> = None;
    for name in names.iter().rev() {
        let children: Vec<Value> = link.take().into_iter().collect();
        link = Some(json!({
            "species": { "name": name, "url": species_url(name) },
            "evolves_to": children
        }));
    }
    json!({ "id": 1, "chain": link.unwrap_or(Value::Null) })
}
