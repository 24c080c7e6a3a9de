use super::*;

static DUPLICATE_IDS: [PortfolioItem; 2] = [
    PortfolioItem {
        id: ItemId(7),
        title: "First",
        category: Category::Props,
        software: "Blender",
        image: "/a.png",
        description: "",
    },
    PortfolioItem {
        id: ItemId(7),
        title: "Second",
        category: Category::Props,
        software: "Blender",
        image: "/b.png",
        description: "",
    },
];

static UNTITLED: [PortfolioItem; 1] = [PortfolioItem {
    id: ItemId(3),
    title: "  ",
    category: Category::Sculpture,
    software: "ZBrush",
    image: "/c.png",
    description: "",
}];

#[test]
fn builtin_catalog_passes_validation() {
    let builtin = Catalog::builtin();
    assert_eq!(builtin.len(), 6);
    assert!(!builtin.is_empty());
    assert_eq!(Catalog::new(&PORTFOLIO_ITEMS).map(|c| c.len()), Ok(6));
}

#[test]
fn builtin_catalog_keeps_display_order() {
    let ids: Vec<u32> = Catalog::builtin().items().iter().map(|item| item.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn rejects_duplicate_ids() {
    assert_eq!(
        Catalog::new(&DUPLICATE_IDS).unwrap_err(),
        CatalogError::DuplicateId(7)
    );
}

#[test]
fn rejects_blank_titles() {
    assert_eq!(
        Catalog::new(&UNTITLED).unwrap_err(),
        CatalogError::EmptyTitle(3)
    );
}

#[test]
fn find_resolves_known_ids_only() {
    let catalog = Catalog::builtin();
    assert_eq!(
        catalog.find(ItemId(3)).map(|item| item.title),
        Some("Mechanical Robot")
    );
    assert!(catalog.find(ItemId(42)).is_none());
}

#[test]
fn static_sections_are_populated() {
    assert_eq!(HIGHLIGHTS.len(), 2);
    assert!(HIGHLIGHTS.iter().all(|highlight| highlight.stats.len() == 3));
    assert_eq!(PROFILE_STATS[0].value, "150+");
    assert_eq!(SECTION_ANCHORS, ["Home", "About", "Portfolio", "Contact"]);
}
