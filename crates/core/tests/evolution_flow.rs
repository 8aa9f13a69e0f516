use pokedex_core::api::{fixtures, MemoryTransport};
use pokedex_core::{Pokedex, PokedexConfig, PokedexError};
use std::sync::Arc;

/// Chain A → B → C, all three resolvable
fn chain_transport() -> MemoryTransport {
    MemoryTransport::new()
        .with_json(
            fixtures::detail_url("a"),
            fixtures::pokemon(101, "a", &["bug"], 3, 29),
        )
        .with_json(
            fixtures::detail_url("b"),
            fixtures::pokemon(102, "b", &["bug"], 7, 99),
        )
        .with_json(
            fixtures::detail_url("c"),
            fixtures::pokemon(103, "c", &["bug", "flying"], 11, 320),
        )
        .with_json(fixtures::species_url("a"), fixtures::species(40))
        .with_json(fixtures::chain_url(40), fixtures::linear_chain(&["a", "b", "c"]))
}

fn pokedex(transport: MemoryTransport) -> Pokedex {
    Pokedex::new(
        PokedexConfig::default().with_base_url(fixtures::BASE_URL),
        Arc::new(transport),
    )
}

#[tokio::test]
async fn chain_a_b_c_resolves_in_order_with_images() {
    let pokedex = pokedex(chain_transport());
    let detail = pokedex.details().resolve_by_name("a").await.unwrap();

    let chain = pokedex.chains().resolve_chain(&detail).await.unwrap();
    assert_eq!(chain.len(), 3);
    for (node, (name, id)) in chain.iter().zip([("a", 101), ("b", 102), ("c", 103)]) {
        assert_eq!(node.name, name);
        assert_eq!(node.image_url, fixtures::artwork_url(id));
    }
}

#[tokio::test]
async fn one_failed_stage_fails_the_whole_chain() {
    let pokedex = pokedex(chain_transport().with_failure(fixtures::detail_url("b")));
    let detail = pokedex.details().resolve_by_name("a").await.unwrap();

    let result = pokedex.chains().resolve_chain(&detail).await;
    assert!(matches!(result, Err(PokedexError::Status { status: 500, .. })));
}

#[tokio::test]
async fn view_includes_evolutions() {
    let pokedex = pokedex(chain_transport());

    let view = pokedex.view("  A ").await.unwrap();
    assert_eq!(view.detail.id, 101);
    assert_eq!(view.detail.weight_kg, 2.9);
    let names: Vec<&str> = view.evolutions.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, ["a", "b", "c"]);
}

#[tokio::test]
async fn view_degrades_when_chain_stage_is_missing() {
    let pokedex = pokedex(chain_transport().with_failure(fixtures::detail_url("c")));

    let view = pokedex.view("a").await.unwrap();
    assert_eq!(view.detail.name, "a");
    assert!(view.evolutions.is_empty());
}

#[tokio::test]
async fn view_of_unknown_name_is_not_found() {
    let pokedex = pokedex(chain_transport());

    let err = pokedex.view("zz").await.unwrap_err();
    assert!(matches!(err, PokedexError::NotFound { .. }));
}
