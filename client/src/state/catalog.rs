//! Static product catalog and its grid layout.
//!
//! DESIGN
//! ======
//! The catalog is compiled into the binary and never mutated. Records are
//! `Copy` and borrowed as `&'static Product` everywhere else, so a selection
//! is just a reference into `CATALOG`.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

/// A single catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    /// Display string, already formatted with currency.
    pub price: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub materials: &'static [&'static str],
}

pub static CATALOG: [Product; 6] = [
    Product {
        id: "1",
        name: "Ghost Shell v1",
        category: "Outerwear",
        price: "$580",
        image: "https://images.unsplash.com/photo-1551028719-00167b16eac5?q=80&w=1000&auto=format&fit=crop",
        description: "A liquid-resistant membrane crafted for city dwellers. Zero-noise textile construction allows for total urban invisibility.",
        materials: &["Bio-Nylon", "Aramid Fibers"],
    },
    Product {
        id: "2",
        name: "Void Hoodie",
        category: "Mid-layer",
        price: "$240",
        image: "https://images.unsplash.com/photo-1556821840-3a63f95609a7?q=80&w=1000&auto=format&fit=crop",
        description: "450GSM ultra-dense organic cotton. Features an oversized architectural hood designed for sensory isolation.",
        materials: &["100% Obsidian Cotton", "Recycled Zips"],
    },
    Product {
        id: "3",
        name: "Aura-1 Footwear",
        category: "Tech-Wear",
        price: "$395",
        image: "https://images.unsplash.com/photo-1552346154-21d32810aba3?q=80&w=1000&auto=format&fit=crop",
        description: "Responsive foam core with a structural knit upper. Designed for high-velocity movement across various terrains.",
        materials: &["Knit Tech", "Responsive Foam"],
    },
    Product {
        id: "4",
        name: "Neural Cargo",
        category: "Trousers",
        price: "$310",
        image: "https://images.unsplash.com/photo-1594633312681-425c7b97ccd1?q=80&w=1000&auto=format&fit=crop",
        description: "Articulated knees and 8 modular storage zones. Constructed with memory fabric that adapts to your silhouette.",
        materials: &["Memory Poly", "Carbon Threads"],
    },
    Product {
        id: "5",
        name: "Signal Scarf",
        category: "Accessory",
        price: "$120",
        image: "https://images.unsplash.com/photo-1520903920243-00d872a2d1c9?q=80&w=1000&auto=format&fit=crop",
        description: "Infused with conductive silver threads to block localized RFID signals. Protection and warmth in a single piece.",
        materials: &["Silver Infused Wool"],
    },
    Product {
        id: "6",
        name: "Prism Vest",
        category: "Tech-Wear",
        price: "$450",
        image: "https://images.unsplash.com/photo-1511405946472-a37e3b5ccd4f?q=80&w=1000&auto=format&fit=crop",
        description: "Retro-reflective glass bead coating creates a shimmering effect under direct light. High visibility for night operations.",
        materials: &["Glass Bead Coating", "Mesh Lining"],
    },
];

/// Column spans (out of 12) for each catalog slot, in catalog order.
pub const GRID_SPANS: [u8; 6] = [8, 4, 4, 8, 6, 6];

/// Index of the card that shares its column with the materials lab panel.
pub const LAB_PANEL_SLOT: usize = 1;

/// One cell of the asymmetric catalog grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridSlot {
    pub product: &'static Product,
    pub span: u8,
    pub with_lab_panel: bool,
}

/// Look up a product by id.
#[must_use]
pub fn find(id: &str) -> Option<&'static Product> {
    CATALOG.iter().find(|p| p.id == id)
}

/// Catalog products paired with their grid placement.
pub fn grid() -> impl Iterator<Item = GridSlot> {
    CATALOG
        .iter()
        .zip(GRID_SPANS)
        .enumerate()
        .map(|(i, (product, span))| GridSlot { product, span, with_lab_panel: i == LAB_PANEL_SLOT })
}
