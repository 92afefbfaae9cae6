//! Catalog hierarchy shared by the catalog and car-spec views.
//!
//! DESIGN
//! ======
//! Both views walk Brand → Model → Submodel → Generation → Spec. A `Trail`
//! records the ids picked so far; its `scope` names the list to show next
//! along with the parent id every nested endpoint needs. Rows of every level
//! are flattened into `ListRow` so one table renders them all.

#[cfg(test)]
#[path = "browse_test.rs"]
mod browse_test;

use leptos::prelude::*;

use crate::net::api::{self, ApiError};
use crate::net::types::{
    Brand, CarSpec, CarSpecCreate, Generation, GenerationCreate, Model, NameCreate, Paginated,
    Submodel,
};
use crate::state::auth::use_auth;
use crate::state::pager::PageQuery;

/// A list to show, with the parent id its endpoints are nested under.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scope {
    Brands,
    Models { brand_id: i64 },
    Submodels { model_id: i64 },
    Generations { submodel_id: i64 },
    Specs { generation_id: i64 },
}

impl Scope {
    pub fn title(self) -> &'static str {
        match self {
            Self::Brands => "Brands",
            Self::Models { .. } => "Models",
            Self::Submodels { .. } => "Submodels",
            Self::Generations { .. } => "Generations",
            Self::Specs { .. } => "Specs",
        }
    }

    /// Specs have no children.
    pub fn is_leaf(self) -> bool {
        matches!(self, Self::Specs { .. })
    }

    /// Brand, model and submodel share the name-only editor.
    pub fn takes_name_only(self) -> bool {
        matches!(self, Self::Brands | Self::Models { .. } | Self::Submodels { .. })
    }
}

/// Ids picked so far, outermost first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Trail {
    brand: Option<i64>,
    model: Option<i64>,
    submodel: Option<i64>,
    generation: Option<i64>,
}

impl Trail {
    pub fn scope(&self) -> Scope {
        match (self.brand, self.model, self.submodel, self.generation) {
            (_, _, _, Some(generation_id)) => Scope::Specs { generation_id },
            (_, _, Some(submodel_id), None) => Scope::Generations { submodel_id },
            (_, Some(model_id), None, None) => Scope::Submodels { model_id },
            (Some(brand_id), None, None, None) => Scope::Models { brand_id },
            // Empty, or a gap `descend` cannot produce.
            _ => Scope::Brands,
        }
    }

    /// Step into the row `id` of the current list. No-op on specs.
    #[must_use]
    pub fn descend(self, id: i64) -> Self {
        match self.scope() {
            Scope::Brands => Self { brand: Some(id), ..self },
            Scope::Models { .. } => Self { model: Some(id), ..self },
            Scope::Submodels { .. } => Self { submodel: Some(id), ..self },
            Scope::Generations { .. } => Self { generation: Some(id), ..self },
            Scope::Specs { .. } => self,
        }
    }

    /// Step back to the enclosing list.
    #[must_use]
    pub fn ascend(self) -> Self {
        if self.generation.is_some() {
            Self { generation: None, ..self }
        } else if self.submodel.is_some() {
            Self { submodel: None, ..self }
        } else if self.model.is_some() {
            Self { model: None, ..self }
        } else {
            Self::default()
        }
    }

    pub fn is_root(&self) -> bool {
        self.brand.is_none()
    }
}

/// One row of any hierarchy level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListRow {
    pub id: i64,
    /// Raw record name, used to prefill the editor.
    pub name: String,
    pub label: String,
    pub detail: Option<String>,
    /// Start and end year of a generation.
    pub years: Option<(i32, i32)>,
    pub created_by: i64,
}

impl ListRow {
    fn named(id: i64, name: String, created_by: i64) -> Self {
        Self { id, label: name.clone(), name, detail: None, years: None, created_by }
    }
}

impl From<Brand> for ListRow {
    fn from(brand: Brand) -> Self {
        Self::named(brand.id, brand.name, brand.created_by)
    }
}

impl From<Model> for ListRow {
    fn from(model: Model) -> Self {
        Self::named(model.id, model.name, model.created_by)
    }
}

impl From<Submodel> for ListRow {
    fn from(submodel: Submodel) -> Self {
        Self::named(submodel.id, submodel.name, submodel.created_by)
    }
}

impl From<Generation> for ListRow {
    fn from(generation: Generation) -> Self {
        Self {
            id: generation.id,
            label: generation.display_name(),
            years: Some((generation.year_start, generation.year_end)),
            ..Self::named(generation.id, generation.name, generation.created_by)
        }
    }
}

impl From<CarSpec> for ListRow {
    fn from(spec: CarSpec) -> Self {
        Self {
            detail: Some(spec_detail(&spec)),
            ..Self::named(spec.id, spec.name, spec.created_by)
        }
    }
}

/// "2.0 TSI, 245 hp, 370 Nm, Petrol, 2020"
pub fn spec_detail(spec: &CarSpec) -> String {
    format!(
        "{}, {} hp, {} Nm, {}, {}",
        spec.engine, spec.horsepower, spec.torque, spec.fuel_type, spec.year
    )
}

fn into_rows<T>(page: Paginated<T>) -> Paginated<ListRow>
where
    ListRow: From<T>,
{
    Paginated { data: page.data.into_iter().map(ListRow::from).collect(), meta: page.meta }
}

/// Fetch one page of the list named by `scope`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn load_rows(scope: Scope, query: &PageQuery) -> Result<Paginated<ListRow>, ApiError> {
    Ok(match scope {
        Scope::Brands => into_rows(api::list_brands(query).await?),
        Scope::Models { brand_id } => into_rows(api::list_models(brand_id, query).await?),
        Scope::Submodels { model_id } => into_rows(api::list_submodels(model_id, query).await?),
        Scope::Generations { submodel_id } => {
            into_rows(api::list_generations(submodel_id, query).await?)
        }
        Scope::Specs { generation_id } => into_rows(api::list_specs(generation_id, query).await?),
    })
}

/// Delete row `id` from the list named by `scope`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn delete_row(scope: Scope, id: i64) -> Result<(), ApiError> {
    match scope {
        Scope::Brands => api::delete_brand(id).await,
        Scope::Models { brand_id } => api::delete_model(brand_id, id).await,
        Scope::Submodels { model_id } => api::delete_submodel(model_id, id).await,
        Scope::Generations { submodel_id } => api::delete_generation(submodel_id, id).await,
        Scope::Specs { generation_id } => api::delete_spec(generation_id, id).await,
    }
}

/// Create (`id` is `None`) or rename a brand, model or submodel.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn save_name(scope: Scope, id: Option<i64>, payload: NameCreate) -> Result<(), ApiError> {
    match (scope, id) {
        (Scope::Models { brand_id }, None) => api::create_model(brand_id, &payload).await.map(drop),
        (Scope::Models { brand_id }, Some(id)) => {
            api::update_model(brand_id, id, &payload).await.map(drop)
        }
        (Scope::Submodels { model_id }, None) => {
            api::create_submodel(model_id, &payload).await.map(drop)
        }
        (Scope::Submodels { model_id }, Some(id)) => {
            api::update_submodel(model_id, id, &payload).await.map(drop)
        }
        (_, None) => api::create_brand(&payload).await.map(drop),
        (_, Some(id)) => api::update_brand(id, &payload).await.map(drop),
    }
}

/// Create or update a generation of `submodel_id`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn save_generation(
    submodel_id: i64,
    id: Option<i64>,
    payload: GenerationCreate,
) -> Result<(), ApiError> {
    match id {
        None => api::create_generation(submodel_id, &payload).await.map(drop),
        Some(id) => api::update_generation(submodel_id, id, &payload).await.map(drop),
    }
}

/// Create or update a spec of `generation_id`.
///
/// # Errors
///
/// See [`ApiError`].
pub async fn save_spec(generation_id: i64, id: Option<i64>, payload: CarSpecCreate) -> Result<(), ApiError> {
    match id {
        None => api::create_spec(generation_id, &payload).await.map(drop),
        Some(id) => api::update_spec(generation_id, id, &payload).await.map(drop),
    }
}

/// Table of hierarchy rows.
///
/// `on_open` makes labels clickable. `on_edit` and `on_delete` add buttons on
/// rows the user may modify. `on_save` adds an "Add to My Cars" button.
#[component]
pub fn RowTable(
    #[prop(into)] rows: Signal<Vec<ListRow>>,
    #[prop(optional)] on_open: Option<Callback<i64>>,
    #[prop(optional)] on_edit: Option<Callback<i64>>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
    #[prop(optional)] on_save: Option<Callback<i64>>,
) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || rows.with(|rows| !rows.is_empty())
            fallback=|| view! { <p class="empty-state">"Nothing here yet."</p> }
        >
            <table class="row-table">
                <tbody>
                    <For each=move || rows.get() key=|row| row.id let:row>
                        {
                            let id = row.id;
                            let created_by = row.created_by;
                            let label = row.label.clone();
                            view! {
                                <tr>
                                    <td class="row-table__label">
                                        {match on_open {
                                            Some(open) => {
                                                view! {
                                                    <button class="link-button" on:click=move |_| open.run(id)>
                                                        {label}
                                                    </button>
                                                }
                                                    .into_any()
                                            }
                                            None => view! { <span>{label}</span> }.into_any(),
                                        }}
                                    </td>
                                    <td class="row-table__detail">{row.detail.clone().unwrap_or_default()}</td>
                                    <td class="row-table__actions">
                                        {on_save
                                            .map(|save| {
                                                view! {
                                                    <button class="btn btn--secondary" on:click=move |_| save.run(id)>
                                                        "Add to My Cars"
                                                    </button>
                                                }
                                            })}
                                        {move || {
                                            on_edit
                                                .filter(|_| auth.can_modify(created_by))
                                                .map(|edit| {
                                                    view! {
                                                        <button class="btn btn--secondary" on:click=move |_| edit.run(id)>
                                                            "Edit"
                                                        </button>
                                                    }
                                                })
                                        }}
                                        {move || {
                                            on_delete
                                                .filter(|_| auth.can_modify(created_by))
                                                .map(|delete| {
                                                    view! {
                                                        <button class="btn btn--danger" on:click=move |_| delete.run(id)>
                                                            "Delete"
                                                        </button>
                                                    }
                                                })
                                        }}
                                    </td>
                                </tr>
                            }
                        }
                    </For>
                </tbody>
            </table>
        </Show>
    }
}
