//! Shared test fixtures for integration tests.
//!
//! # Available Fixtures
//!
//! - `hardware_catalog`: storefront hardware offers with vendor-style titles
//! - `game_deals`: game deal records, a second listing shape with different fields
//!
//! Both shapes implement [`Listing`], which is all the engine needs.

use offer_search::Listing;
use rstest::fixture;
use serde::Serialize;

/// A hardware offer as delivered by the storefront client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareOffer {
    pub id: u32,
    pub title: String,
    pub store: String,
    pub price_cents: u64,
}

impl Listing for HardwareOffer {
    fn title(&self) -> &str {
        &self.title
    }
}

/// A game deal, shaped differently from hardware offers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDeal {
    pub deal_id: String,
    pub title: String,
    pub savings_percent: u8,
}

impl Listing for GameDeal {
    fn title(&self) -> &str {
        &self.title
    }
}

fn offer(id: u32, title: &str, price_cents: u64) -> HardwareOffer {
    HardwareOffer {
        id,
        title: title.to_string(),
        store: "Kabum".to_string(),
        price_cents,
    }
}

#[fixture]
pub fn hardware_catalog() -> Vec<HardwareOffer> {
    offer_search::tracing::init();
    vec![
        offer(1, "Placa de Vídeo RTX 4060 8GB GDDR6 - ASUS", 199_900),
        offer(2, "Monitor 27\" Gamer 144Hz Full HD 1ms", 99_900),
        offer(3, "Placa de Vídeo NVIDIA GeForce RTX 4070 Ti 12GB", 549_900),
        offer(4, "Placa de Vídeo AMD RX 7600 8GB GDDR6", 179_900),
        offer(5, "Placa de Vídeo Gigabyte GeForce RTX 4090 Gaming OC 24GB", 1_299_900),
        offer(6, "Processador Intel Core i9-13900K 3.0GHz", 329_900),
        offer(7, "Processador AMD Ryzen 5 5600, 3.5GHz, AM4", 79_900),
        offer(8, "SSD Kingston NV2 1TB NVMe M.2", 39_900),
        offer(9, "Memória Corsair Vengeance 16GB DDR5 5200MHz", 49_900),
        offer(10, "Headset Gamer HyperX Cloud II", 39_900),
        offer(11, "", 100),
    ]
}

#[fixture]
pub fn game_deals() -> Vec<GameDeal> {
    offer_search::tracing::init();
    [
        ("d1", "Hollow Knight", 50),
        ("d2", "Hollow Knight: Silksong", 10),
        ("d3", "The Witcher 3: Wild Hunt - Game of the Year Edition", 80),
        ("d4", "Cyberpunk 2077", 65),
        ("d5", "Pokémon Legends: Arceus", 0),
    ]
    .into_iter()
    .map(|(deal_id, title, savings_percent)| GameDeal {
        deal_id: deal_id.to_string(),
        title: title.to_string(),
        savings_percent,
    })
    .collect()
}

/// Titles of ranked results, in result order.
#[allow(dead_code)] // Used across different integration test crates
pub fn titles<L: Listing>(results: &[offer_search::ScoredListing<L>]) -> Vec<&str> {
    results.iter().map(|r| r.listing.title()).collect()
}
