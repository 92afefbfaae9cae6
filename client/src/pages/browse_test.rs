use super::*;
use crate::net::types::PageMeta;

fn spec() -> CarSpec {
    CarSpec {
        id: 9,
        name: "GTI".to_owned(),
        engine: "2.0 TSI".to_owned(),
        horsepower: 245,
        torque: 370,
        fuel_type: "Petrol".to_owned(),
        year: 2020,
        generation_id: 4,
        created_by: 2,
    }
}

#[test]
fn empty_trail_lists_brands() {
    let trail = Trail::default();
    assert_eq!(trail.scope(), Scope::Brands);
    assert!(trail.is_root());
}

#[test]
fn descending_walks_the_hierarchy() {
    let trail = Trail::default().descend(1);
    assert_eq!(trail.scope(), Scope::Models { brand_id: 1 });
    let trail = trail.descend(2);
    assert_eq!(trail.scope(), Scope::Submodels { model_id: 2 });
    let trail = trail.descend(3);
    assert_eq!(trail.scope(), Scope::Generations { submodel_id: 3 });
    let trail = trail.descend(4);
    assert_eq!(trail.scope(), Scope::Specs { generation_id: 4 });
    assert!(trail.scope().is_leaf());
}

#[test]
fn descending_from_specs_is_a_no_op() {
    let trail = Trail::default().descend(1).descend(2).descend(3).descend(4);
    assert_eq!(trail.descend(5), trail);
}

#[test]
fn ascending_clears_the_innermost_pick() {
    let trail = Trail::default().descend(1).descend(2).descend(3);
    assert_eq!(trail.ascend().scope(), Scope::Submodels { model_id: 2 });
    assert_eq!(trail.ascend().ascend().ascend(), Trail::default());
    assert_eq!(Trail::default().ascend(), Trail::default());
}

#[test]
fn scope_titles_and_editor_kind() {
    assert_eq!(Scope::Brands.title(), "Brands");
    assert_eq!(Scope::Specs { generation_id: 1 }.title(), "Specs");
    assert!(Scope::Submodels { model_id: 1 }.takes_name_only());
    assert!(!Scope::Generations { submodel_id: 1 }.takes_name_only());
    assert!(!Scope::Specs { generation_id: 1 }.takes_name_only());
}

#[test]
fn spec_rows_carry_detail_and_owner() {
    let row = ListRow::from(spec());
    assert_eq!(row.label, "GTI");
    assert_eq!(row.detail.as_deref(), Some("2.0 TSI, 245 hp, 370 Nm, Petrol, 2020"));
    assert_eq!(row.created_by, 2);
}

#[test]
fn generation_rows_show_years() {
    let generation = Generation {
        id: 4,
        name: "Mk8".to_owned(),
        year_start: 2020,
        year_end: 2024,
        submodel_id: 3,
        created_by: 1,
    };
    let row = ListRow::from(generation);
    assert_eq!(row.label, "Mk8 (2020-2024)");
    assert_eq!(row.name, "Mk8");
    assert_eq!(row.years, Some((2020, 2024)));
}

#[test]
fn name_rows_prefill_from_the_raw_name() {
    let row = ListRow::from(Brand { id: 1, name: "Audi".to_owned(), created_by: 3 });
    assert_eq!(row.name, "Audi");
    assert_eq!(row.years, None);
    assert_eq!(row.detail, None);
}

#[test]
fn into_rows_keeps_page_meta() {
    let meta = PageMeta { page: 2, per_page: 10, total_items: 11, total_pages: 2 };
    let page = Paginated { data: vec![Brand { id: 1, name: "Audi".to_owned(), created_by: 1 }], meta };
    let rows = into_rows(page);
    assert_eq!(rows.meta, meta);
    assert_eq!(rows.data[0].label, "Audi");
}
