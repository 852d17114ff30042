//! Seeded Essancia catalog.
//!
//! Static content in the shapes the product pages actually see: most
//! prices are authored as display text, a few as plain numbers; most
//! products carry an image list, one carries a single reference. The
//! resolver normalizes all of it at read time.

use essancia_commerce::catalog::{Catalog, Category, CategoryKey, ImageSet, PriceTag, Product};
use essancia_commerce::ProductId;

/// Build the full seeded catalog, categories in display order.
pub fn essancia_catalog() -> Catalog {
    Catalog::new(vec![
        Category::new(CategoryKey::Hoodie, hoodies()),
        Category::new(CategoryKey::Sweatshirt, sweatshirts()),
        Category::new(CategoryKey::Tshirt, tshirts()),
        Category::new(CategoryKey::Oversize, oversize_tees()),
        Category::new(CategoryKey::Joggers, joggers()),
    ])
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

fn hoodies() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("ess-hoodie-01"),
            name: "Shadow Oversized Hoodie".to_string(),
            price: PriceTag::from("\u{20b9}1,299.00"),
            original_price: Some(PriceTag::from("\u{20b9}1,799.00")),
            discount: Some("28% off".to_string()),
            images: ImageSet::Many(strings(&[
                "/images/collections/hoodies/shadow-front.webp",
                "/images/collections/hoodies/shadow-back.webp",
                "/images/collections/hoodies/shadow-detail.webp",
            ])),
            colors: strings(&["Black", "Charcoal", "Olive"]),
            sizes: strings(&["S", "M", "L", "XL"]),
            description: Some(
                "Heavyweight 400 GSM fleece with a dropped-shoulder fit and a \
                 double-lined hood. Brushed inside for warmth without bulk."
                    .to_string(),
            ),
            features: strings(&[
                "400 GSM brushed fleece",
                "Dropped-shoulder oversized fit",
                "Double-lined hood with flat drawcords",
                "Ribbed cuffs and hem",
            ]),
            rating: 4.6,
            reviews: 24,
        },
        Product {
            id: ProductId::new("ess-hoodie-02"),
            name: "Ivory Zip-Through Hoodie".to_string(),
            price: PriceTag::from("\u{20b9}1,499.00"),
            original_price: None,
            discount: None,
            images: ImageSet::Many(strings(&[
                "/images/collections/hoodies/ivory-front.webp",
                "/images/collections/hoodies/ivory-back.webp",
            ])),
            colors: strings(&["Ivory", "Stone"]),
            sizes: strings(&["S", "M", "L", "XL", "XXL"]),
            description: Some(
                "A clean zip-through silhouette in off-white terry. Metal \
                 hardware, side-seam pockets, no branding on the chest."
                    .to_string(),
            ),
            features: strings(&[
                "320 GSM loopback terry",
                "YKK metal zip",
                "Side-seam pockets",
            ]),
            rating: 4.2,
            reviews: 9,
        },
        Product {
            id: ProductId::new("ess-hoodie-03"),
            name: "Ember Washed Hoodie".to_string(),
            price: PriceTag::from(1199.0),
            original_price: None,
            discount: None,
            images: ImageSet::Single(
                "/images/collections/hoodies/ember-front.webp".to_string(),
            ),
            colors: strings(&["Rust", "Faded Black"]),
            sizes: strings(&["M", "L", "XL"]),
            description: Some(
                "Garment-dyed and stone-washed for a lived-in look; every \
                 piece fades a little differently."
                    .to_string(),
            ),
            features: Vec::new(),
            rating: 0.0,
            reviews: 0,
        },
    ]
}

fn sweatshirts() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("ess-sweat-01"),
            name: "Powder Blue Crewneck".to_string(),
            price: PriceTag::from("\u{20b9}1,099.00"),
            original_price: Some(PriceTag::from("\u{20b9}1,399.00")),
            discount: Some("21% off".to_string()),
            images: ImageSet::Many(strings(&[
                "/images/collections/sweatshirts/powder-blue-front.webp",
                "/images/collections/sweatshirts/powder-blue-back.webp",
            ])),
            colors: strings(&["Powder Blue", "Sage"]),
            sizes: strings(&["S", "M", "L", "XL"]),
            description: Some(
                "A relaxed crewneck in soft pastel fleece with tonal \
                 embroidery at the chest."
                    .to_string(),
            ),
            features: strings(&[
                "350 GSM cotton fleece",
                "Tonal chest embroidery",
                "Relaxed fit",
            ]),
            rating: 4.8,
            reviews: 31,
        },
        Product {
            id: ProductId::new("ess-sweat-02"),
            name: "Graphite Half-Zip".to_string(),
            price: PriceTag::from("\u{20b9}1,249.00"),
            original_price: None,
            discount: None,
            images: ImageSet::Many(strings(&[
                "/images/collections/sweatshirts/graphite-front.webp",
            ])),
            colors: strings(&["Graphite"]),
            sizes: strings(&["M", "L", "XL"]),
            description: Some(
                "A structured half-zip with a funnel neck. Layers cleanly \
                 over tees and under jackets."
                    .to_string(),
            ),
            features: strings(&["Funnel neck", "Half-zip placket"]),
            rating: 4.0,
            reviews: 1,
        },
    ]
}

fn tshirts() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("ess-tee-01"),
            name: "Monochrome Graphic Tee".to_string(),
            price: PriceTag::from("\u{20b9}799.00"),
            original_price: None,
            discount: None,
            images: ImageSet::Many(strings(&[
                "/images/collections/tshirts/mono-front.webp",
                "/images/collections/tshirts/mono-back.webp",
            ])),
            colors: strings(&["White", "Black"]),
            sizes: strings(&["S", "M", "L", "XL"]),
            description: Some(
                "Midweight combed cotton with a water-based back print that \
                 stays soft through washes."
                    .to_string(),
            ),
            features: strings(&[
                "220 GSM combed cotton",
                "Water-based back print",
                "Pre-shrunk",
            ]),
            rating: 4.4,
            reviews: 17,
        },
        Product {
            id: ProductId::new("ess-tee-02"),
            name: "Essential Pocket Tee".to_string(),
            price: PriceTag::from(649.0),
            original_price: None,
            discount: None,
            images: ImageSet::Many(strings(&[
                "/images/collections/tshirts/pocket-front.webp",
            ])),
            colors: strings(&["Ecru", "Navy", "Forest"]),
            sizes: strings(&["S", "M", "L"]),
            description: Some("A plain pocket tee in three seasonal colors.".to_string()),
            features: Vec::new(),
            rating: 4.1,
            reviews: 6,
        },
    ]
}

fn oversize_tees() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("ess-over-01"),
            name: "Drift Boxy Tee".to_string(),
            price: PriceTag::from("\u{20b9}899.00"),
            original_price: Some(PriceTag::from("\u{20b9}1,099.00")),
            discount: Some("18% off".to_string()),
            images: ImageSet::Many(strings(&[
                "/images/collections/oversize/drift-front.webp",
                "/images/collections/oversize/drift-side.webp",
            ])),
            colors: strings(&["Washed Grey", "Bone"]),
            sizes: strings(&["M", "L", "XL"]),
            description: Some(
                "A boxy, cropped-length tee cut from slub cotton with a \
                 raw-edge hem."
                    .to_string(),
            ),
            features: strings(&["Boxy drop-shoulder cut", "Raw-edge hem", "Slub cotton"]),
            rating: 4.7,
            reviews: 12,
        },
        Product {
            id: ProductId::new("ess-over-02"),
            name: "Canvas Free-Size Tee".to_string(),
            price: PriceTag::from("\u{20b9}849.00"),
            original_price: None,
            discount: None,
            images: ImageSet::Many(strings(&[
                "/images/collections/oversize/canvas-front.webp",
            ])),
            // One-size drop, no size or color options.
            colors: Vec::new(),
            sizes: Vec::new(),
            description: Some(
                "A single-size canvas for the season's artist print. Fits \
                 relaxed on most."
                    .to_string(),
            ),
            features: strings(&["Limited artist print", "One size"]),
            rating: 3.9,
            reviews: 4,
        },
    ]
}

fn joggers() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::new("ess-jogger-01"),
            name: "Trail Tapered Joggers".to_string(),
            price: PriceTag::from("\u{20b9}1,199.00"),
            original_price: None,
            discount: None,
            images: ImageSet::Many(strings(&[
                "/images/joggers-collections/trail-front.webp",
                "/images/joggers-collections/trail-back.webp",
            ])),
            colors: strings(&["Black", "Khaki"]),
            sizes: strings(&["S", "M", "L", "XL"]),
            description: Some(
                "Tapered joggers with an elasticated waist, zip pockets and \
                 ribbed ankle cuffs."
                    .to_string(),
            ),
            features: strings(&["Zip hand pockets", "Ribbed cuffs", "Drawcord waist"]),
            rating: 4.5,
            reviews: 21,
        },
        Product {
            id: ProductId::new("ess-jogger-02"),
            name: "Loft Lounge Joggers".to_string(),
            price: PriceTag::from("\u{20b9}999.00"),
            original_price: Some(PriceTag::from("\u{20b9}1,299.00")),
            discount: Some("23% off".to_string()),
            images: ImageSet::Many(strings(&[
                "/images/joggers-collections/loft-front.webp",
            ])),
            colors: strings(&["Heather Grey", "Espresso"]),
            sizes: strings(&["S", "M", "L"]),
            description: Some("Brushed-back lounge joggers with a straight leg.".to_string()),
            features: Vec::new(),
            rating: 4.3,
            reviews: 8,
        },
    ]
}
