//! User entity <-> model mapper

use tuiter_core::entities::{AccountType, GeoLocation, MaritalStatus, User};
use tuiter_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// The password hash never crosses into the domain entity; callers that
/// need it go through `UserRepository::get_password_hash`.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        let location = model
            .latitude
            .zip(model.longitude)
            .map(|(latitude, longitude)| GeoLocation {
                latitude,
                longitude,
            });

        User {
            id: Snowflake::new(model.id),
            username: model.username,
            email: model.email,
            first_name: model.first_name,
            last_name: model.last_name,
            profile_photo: model.profile_photo,
            header_image: model.header_image,
            biography: model.biography,
            date_of_birth: model.date_of_birth,
            account_type: AccountType::parse(&model.account_type),
            marital_status: MaritalStatus::parse(&model.marital_status),
            location,
            joined_at: model.joined_at,
        }
    }
}
