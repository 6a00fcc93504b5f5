use chrono::Utc;
use sea_orm::entity::prelude::DateTimeWithTimeZone;

/// Implemented by `#[base_entity]` so listings can default to newest first.
pub trait HasCreatedAtColumn: sea_orm::EntityTrait {
    fn created_at_column() -> Self::Column;
}

pub trait HasIdActiveModel {
    fn set_id(&mut self, id: uuid::Uuid);
}

pub trait TimestampedActiveModel {
    fn set_created_at(&mut self, ts: DateTimeWithTimeZone);
    fn set_updated_at(&mut self, ts: DateTimeWithTimeZone);

    fn touch(&mut self) {
        self.set_updated_at(Utc::now().fixed_offset());
    }
}

/// Label used in error messages, e.g. `User not found (id=...)`.
pub trait NamedEntity {
    const NAME: &'static str;
}
