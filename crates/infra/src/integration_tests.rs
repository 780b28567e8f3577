//! Integration tests for the catalog pipeline.
//!
//! Tests: CatalogService → CatalogRepository (in-memory) → seeded fixture
//!
//! Verifies:
//! - Referential integrity is checked before a style is deleted
//! - Beer deletes are case-insensitive
//! - Find-by-style and availability filters over the seed data

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use cerebral_catalog::{NewBeer, NewStyle};
    use cerebral_core::{BeerName, StyleName};

    use crate::catalog_service::{CatalogError, CatalogService};
    use crate::repository::{CatalogRepository, InMemoryCatalogRepository};
    use crate::seed;

    async fn setup() -> CatalogService<Arc<dyn CatalogRepository>> {
        let repo: Arc<dyn CatalogRepository> = Arc::new(InMemoryCatalogRepository::new());
        seed::run(repo.as_ref()).await.unwrap();
        CatalogService::new(repo)
    }

    #[tokio::test]
    async fn seeded_catalog_has_three_styles_and_three_beers() {
        let service = setup().await;
        assert_eq!(service.list_styles().await.unwrap().len(), 3);
        assert_eq!(service.list_beers().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn style_without_beers_is_deleted_and_disappears() {
        let service = setup().await;

        let deleted = service.delete_style(StyleName::new("Pilsner2")).await.unwrap();
        assert_eq!(deleted.as_str(), "Pilsner2");

        let styles = service.list_styles().await.unwrap();
        assert_eq!(styles.len(), 2);
        assert!(styles.iter().all(|s| s.style_name.as_str() != "Pilsner2"));
    }

    #[tokio::test]
    async fn style_with_beers_is_refused() {
        let service = setup().await;

        let err = service
            .delete_style(StyleName::new("Brettanomyces Saison"))
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::StyleInUse(StyleName::new("Brettanomyces Saison")));
        assert_eq!(service.list_styles().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn unknown_style_delete_is_not_found() {
        let service = setup().await;

        let err = service.delete_style(StyleName::new("Pilsner3")).await.unwrap_err();
        assert_eq!(err, CatalogError::StyleNotFound(StyleName::new("Pilsner3")));
    }

    #[tokio::test]
    async fn beer_delete_ignores_case() {
        let service = setup().await;

        let deleted = service.delete_beer(BeerName::from_path("trembling+Giant")).await.unwrap();
        assert_eq!(deleted.as_str(), "TREMBLING GIANT");
        assert_eq!(service.list_beers().await.unwrap().len(), 2);

        let err = service.delete_beer(BeerName::new("Trembling Giant")).await.unwrap_err();
        assert_eq!(err.to_string(), "No beer 'TREMBLING GIANT' found in database");
    }

    #[tokio::test]
    async fn style_is_deletable_once_its_beers_are_gone() {
        let service = setup().await;

        service.delete_beer(BeerName::new("Trembling Giant")).await.unwrap();
        service.delete_style(StyleName::new("India Pale Ale")).await.unwrap();
        assert_eq!(service.list_styles().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn find_by_style_returns_beers_in_insertion_order() {
        let service = setup().await;

        let beers = service
            .find_by_style(Some("Brettanomyces Saison".to_string()))
            .await
            .unwrap();
        let names: Vec<_> = beers.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["GUAVA-ING THROUGH DIMENSIONS", "TANGERINE-ING THROUGH DIMENSIONS"]
        );
        assert_eq!(beers[0].description, "a very good beer");
        assert_eq!(beers[1].description, "an ok beer");
        assert!(beers.iter().all(|b| b.abv == "6.7%"));
    }

    #[tokio::test]
    async fn find_by_style_requires_a_style_name() {
        let service = setup().await;

        assert_eq!(service.find_by_style(None).await.unwrap_err(), CatalogError::MissingStyleName);
        assert_eq!(
            service.find_by_style(Some(String::new())).await.unwrap_err(),
            CatalogError::MissingStyleName
        );
    }

    #[tokio::test]
    async fn whitespace_style_name_is_looked_up() {
        let service = setup().await;

        let err = service.find_by_style(Some("  ".to_string())).await.unwrap_err();
        assert_eq!(err, CatalogError::NoBeersOfStyle(StyleName::new("  ")));
        assert_eq!(err.to_string(), "No beers found of style:   ");
    }

    #[tokio::test]
    async fn find_by_unknown_style_reports_no_beers() {
        let service = setup().await;

        let err = service
            .find_by_style(Some("mystery style".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "No beers found of style: mystery style");
    }

    #[tokio::test]
    async fn availability_flags_partition_the_beers() {
        let service = setup().await;

        let available = service.currently_available("true").await.unwrap();
        let unavailable = service.currently_available("false").await.unwrap();
        assert_eq!(available.len(), 2);
        assert_eq!(unavailable.len(), 1);
        assert!(available.iter().all(|b| b.is_available));
        assert!(unavailable.iter().all(|b| !b.is_available));
        assert!(available.iter().all(|a| unavailable.iter().all(|u| u.id != a.id)));

        let err = service.currently_available("maybe").await.unwrap_err();
        assert_eq!(
            err,
            CatalogError::InvalidAvailability("Availability flag must be 'true' or 'false', got 'maybe'".to_string())
        );
    }

    #[tokio::test]
    async fn added_records_show_up_in_listings() {
        let service = setup().await;

        service
            .add_style(NewStyle::new("freddies secret style", "omg so amazing wow").unwrap())
            .await
            .unwrap();
        let beer = service
            .add_beer(
                NewBeer::new("freddies secret beer", "omg so amazing wow", "110%", true, "freddies secret style")
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(beer.name.as_str(), "FREDDIES SECRET BEER");

        assert_eq!(service.list_styles().await.unwrap().len(), 4);
        assert_eq!(service.currently_available("true").await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn beer_with_unknown_style_is_rejected() {
        let service = setup().await;

        let err = service
            .add_beer(NewBeer::new("lost", "d", "4%", true, "Nope").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::UnknownStyle("Nope".to_string()));
        assert_eq!(err.to_string(), "No style 'Nope' found in database");
    }

    #[tokio::test]
    async fn duplicate_beer_name_is_rejected_case_insensitively() {
        let service = setup().await;

        let err = service
            .add_beer(NewBeer::new("trembling giant", "again", "7.5%", true, "India Pale Ale").unwrap())
            .await
            .unwrap_err();
        assert_eq!(err, CatalogError::Duplicate("Beer 'TREMBLING GIANT' already exists".to_string()));
    }
}
