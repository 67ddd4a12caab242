//! Category Filter Bar

use leptos::prelude::*;

use crate::catalog::CategoryFilter;
use crate::context::use_shop_context;
use crate::store::{use_shop_store, ShopStateStoreFields};

fn filter_label(filter: &CategoryFilter) -> String {
    match filter {
        CategoryFilter::All => "All".to_string(),
        CategoryFilter::Category(name) => {
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

#[component]
pub fn CategoryFilters() -> impl IntoView {
    let store = use_shop_store();
    let ctx = use_shop_context();

    let filters: Vec<CategoryFilter> = std::iter::once(CategoryFilter::All)
        .chain(
            ctx.catalog
                .with_value(|c| c.categories())
                .into_iter()
                .map(CategoryFilter::Category),
        )
        .collect();

    view! {
        <div class="filters">
            {filters.into_iter().map(|filter| {
                let label = filter_label(&filter);
                let value = filter.value().to_string();
                let on_pick = filter.clone();
                view! {
                    <button
                        class=move || if *store.filter().read() == filter { "filter-btn active" } else { "filter-btn" }
                        data-filter=value
                        on:click=move |_| store.filter().set(on_pick.clone())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_label() {
        assert_eq!(filter_label(&CategoryFilter::All), "All");
        assert_eq!(filter_label(&CategoryFilter::Category("soaps".to_string())), "Soaps");
    }
}
