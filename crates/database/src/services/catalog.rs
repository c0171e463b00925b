use crate::entities::{nationality, service, service_detail};
use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};
use std::collections::HashMap;
use uuid::Uuid;

/// Staff-supplied fields for creating or updating a service
#[derive(Debug, Clone)]
pub struct ServiceInput {
    pub name: String,
    pub description: String,
    pub image: Option<String>,
    pub price: Decimal,
    pub working_hours: String,
    pub is_active: bool,
}

pub struct CatalogService;

impl CatalogService {
    /// Active services with their detail line items, for the public site
    pub async fn active_services_with_details(
        db: &DatabaseConnection,
    ) -> Result<Vec<(service::Model, Vec<service_detail::Model>)>, DbErr> {
        let services = service::Entity::find()
            .filter(service::Column::IsActive.eq(true))
            .order_by_desc(service::Column::CreatedAt)
            .all(db)
            .await?;

        if services.is_empty() {
            return Ok(vec![]);
        }

        let service_ids: Vec<Uuid> = services.iter().map(|s| s.id).collect();

        // Batch fetch all details for all services
        let details = service_detail::Entity::find()
            .filter(service_detail::Column::ServiceId.is_in(service_ids))
            .all(db)
            .await?;

        let mut details_by_service: HashMap<Uuid, Vec<service_detail::Model>> = HashMap::new();
        for detail in details {
            details_by_service
                .entry(detail.service_id)
                .or_default()
                .push(detail);
        }

        let results = services
            .into_iter()
            .map(|svc| {
                let svc_details = details_by_service.remove(&svc.id).unwrap_or_default();
                (svc, svc_details)
            })
            .collect();

        Ok(results)
    }

    pub async fn create_service(
        db: &DatabaseConnection,
        input: ServiceInput,
    ) -> Result<service::Model, DbErr> {
        service::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(input.name),
            description: Set(input.description),
            image: Set(input.image),
            price: Set(input.price),
            working_hours: Set(input.working_hours),
            is_active: Set(input.is_active),
            created_at: Set(Utc::now().naive_utc()),
        }
        .insert(db)
        .await
    }

    pub async fn update_service(
        db: &DatabaseConnection,
        id: Uuid,
        input: ServiceInput,
    ) -> Result<Option<service::Model>, DbErr> {
        let Some(existing) = service::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let mut active: service::ActiveModel = existing.into();
        active.name = Set(input.name);
        active.description = Set(input.description);
        active.image = Set(input.image);
        active.price = Set(input.price);
        active.working_hours = Set(input.working_hours);
        active.is_active = Set(input.is_active);

        active.update(db).await.map(Some)
    }

    pub async fn delete_service(db: &DatabaseConnection, id: Uuid) -> Result<u64, DbErr> {
        let result = service::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }

    /// Detail line items are unique per (service, name); the migration
    /// enforces the pair
    pub async fn add_service_detail(
        db: &DatabaseConnection,
        service_id: Uuid,
        name: String,
        description: String,
    ) -> Result<service_detail::Model, DbErr> {
        service_detail::ActiveModel {
            id: Set(Uuid::new_v4()),
            service_id: Set(service_id),
            name: Set(name),
            description: Set(description),
        }
        .insert(db)
        .await
    }

    pub async fn list_nationalities(
        db: &DatabaseConnection,
    ) -> Result<Vec<nationality::Model>, DbErr> {
        nationality::Entity::find()
            .order_by_asc(nationality::Column::Name)
            .all(db)
            .await
    }

    pub async fn create_nationality(
        db: &DatabaseConnection,
        name: String,
        code: String,
    ) -> Result<nationality::Model, DbErr> {
        nationality::ActiveModel {
            id: Set(Uuid::new_v4()),
            name: Set(name),
            code: Set(code),
        }
        .insert(db)
        .await
    }

    pub async fn delete_nationality(db: &DatabaseConnection, id: Uuid) -> Result<u64, DbErr> {
        let result = nationality::Entity::delete_by_id(id).exec(db).await?;
        Ok(result.rows_affected)
    }
}
