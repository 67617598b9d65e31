// Store content - the sections and products of the landing page
//
// Everything here is fixed at compile time; the page never grows or shrinks
// at runtime. Copy is hard-coded (single locale, no i18n layer). Geometry is
// derived from this catalog once at startup and again after a terminal
// resize, never from user actions.

/// What a section renders as. The kinds map to the panels of the original
/// storefront page: hero banner, promo strip, product grid, studio story,
/// visit/contact footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    Hero,
    Promo,
    Products,
    Story,
    Contact,
}

/// One page section: title, body copy, kind.
#[derive(Debug, Clone)]
pub struct SectionDef {
    pub title: &'static str,
    pub body: &'static [&'static str],
    pub kind: SectionKind,
}

/// One product card in the collection grid.
#[derive(Debug, Clone, Copy)]
pub struct Product {
    pub name: &'static str,
    pub tagline: &'static str,
    pub price: &'static str,
}

/// Section row span derived from layout: `[top, top + height)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionGeometry {
    pub top: usize,
    pub height: usize,
}

/// The page, in document order. The hero is always first.
pub fn sections() -> &'static [SectionDef] {
    &[
        SectionDef {
            title: "Aurora Atelier",
            kind: SectionKind::Hero,
            body: &[
                "Handmade lighting for slow evenings.",
                "",
                "Every lamp leaves our workshop after a week",
                "of shaping, sanding and one long burn-in night.",
            ],
        },
        SectionDef {
            title: "Midsummer Sale",
            kind: SectionKind::Promo,
            body: &[
                "Up to 30% off the studio collection.",
                "Free shipping on orders over 120.",
                "Ends Sunday midnight.",
            ],
        },
        SectionDef {
            title: "The Collection",
            kind: SectionKind::Products,
            body: &[],
        },
        SectionDef {
            title: "From the Workshop",
            kind: SectionKind::Story,
            body: &[
                "We started with a single lathe in a garage",
                "in 2019. Today we are four makers, one kiln,",
                "and a stubborn habit of doing things by hand.",
                "",
                "Each piece is numbered and signed. If it ever",
                "breaks, send it back and we repair it for life.",
            ],
        },
        SectionDef {
            title: "Visit Us",
            kind: SectionKind::Contact,
            body: &[
                "Showroom: Lindengracht 42, open Thu-Sat 11-18.",
                "Orders and repairs: hello@aurora-atelier.example",
                "",
                "Prefer to talk? Open the call menu and pick a line.",
            ],
        },
    ]
}

/// The product grid behind the Collection section.
pub fn products() -> &'static [Product] {
    &[
        Product {
            name: "Drift Table Lamp",
            tagline: "Ash wood, linen shade",
            price: "149",
        },
        Product {
            name: "Ember Floor Lamp",
            tagline: "Smoked oak, brass stem",
            price: "289",
        },
        Product {
            name: "Tide Wall Sconce",
            tagline: "Ceramic, warm white",
            price: "98",
        },
        Product {
            name: "Halo Pendant",
            tagline: "Spun aluminium ring",
            price: "175",
        },
        Product {
            name: "Moss Night Light",
            tagline: "Pocket-sized, dimmable",
            price: "39",
        },
        Product {
            name: "Quarry Desk Lamp",
            tagline: "Cast stone base",
            price: "129",
        },
        Product {
            name: "Lantern Set of Three",
            tagline: "Garden path lights",
            price: "210",
        },
        Product {
            name: "Aurora Candle Duo",
            tagline: "Beeswax, 40h burn",
            price: "29",
        },
    ]
}

/// One entry in the floating call menu.
#[derive(Debug, Clone, Copy)]
pub struct CallLine {
    pub label: &'static str,
    pub number: &'static str,
}

/// Phone lines behind the floating call button.
pub fn call_lines() -> &'static [CallLine] {
    &[
        CallLine {
            label: "Showroom",
            number: "+31 20 555 0142",
        },
        CallLine {
            label: "Orders",
            number: "+31 20 555 0178",
        },
        CallLine {
            label: "Repairs",
            number: "+31 20 555 0191",
        },
    ]
}

/// Rows a section needs for its own content, excluding full-page padding.
fn content_rows(def: &SectionDef) -> usize {
    // Title block takes 4 rows (rule, title, rule, gap); the product grid
    // reserves space for cards, the search bar and the carousel hint.
    let body = match def.kind {
        SectionKind::Products => 12,
        _ => def.body.len() + 2,
    };
    4 + body
}

/// Derive section geometry for a viewport of `viewport_rows`.
///
/// Sections are full-viewport panels: each takes at least one screen of
/// rows so a section fills the terminal when scrolled to its top. Spans
/// are adjacent and non-overlapping by construction.
pub fn layout(defs: &[SectionDef], viewport_rows: usize) -> Vec<SectionGeometry> {
    let mut top = 0;
    defs.iter()
        .map(|def| {
            let height = viewport_rows.max(content_rows(def)).max(1);
            let geo = SectionGeometry { top, height };
            top += height;
            geo
        })
        .collect()
}
