//! PostgreSQL Repository Implementation

use chrono::Utc;
use sqlx::PgPool;

use crate::domain::entity::{Address, GeneralProfile};
use crate::domain::repository::ProfileRepository;
use crate::error::ProfileResult;

/// PostgreSQL profile repository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Database row for a general profile.
///
/// The address object is flattened into nullable columns; a row with all
/// address columns NULL maps back to a profile without an address.
#[derive(sqlx::FromRow)]
struct ProfileRow {
    first_name: String,
    last_name: String,
    country_iso: String,
    street_address: Option<String>,
    extra_address: Option<String>,
    city: Option<String>,
    state: Option<String>,
    postal_code: Option<String>,
}

impl ProfileRow {
    fn into_profile(self) -> GeneralProfile {
        let address = Address {
            street_address: self.street_address,
            extra_address: self.extra_address,
            city: self.city,
            state: self.state,
            postal_code: self.postal_code,
        };

        GeneralProfile {
            first_name: self.first_name,
            last_name: self.last_name,
            country_iso: self.country_iso,
            address: (!address.is_empty()).then_some(address),
        }
    }
}

impl ProfileRepository for PgProfileRepository {
    async fn put(&self, username: &str, profile: &GeneralProfile) -> ProfileResult<()> {
        let address = profile.address.clone().unwrap_or_default();

        sqlx::query(
            r#"
            INSERT INTO general_profiles (
                username, first_name, last_name, country_iso,
                street_address, extra_address, city, state, postal_code,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (username) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                country_iso = EXCLUDED.country_iso,
                street_address = EXCLUDED.street_address,
                extra_address = EXCLUDED.extra_address,
                city = EXCLUDED.city,
                state = EXCLUDED.state,
                postal_code = EXCLUDED.postal_code,
                updated_at = EXCLUDED.updated_at
            "#,
        )
        .bind(username)
        .bind(&profile.first_name)
        .bind(&profile.last_name)
        .bind(&profile.country_iso)
        .bind(&address.street_address)
        .bind(&address.extra_address)
        .bind(&address.city)
        .bind(&address.state)
        .bind(&address.postal_code)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, username: &str) -> ProfileResult<Option<GeneralProfile>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            r#"
            SELECT first_name, last_name, country_iso,
                   street_address, extra_address, city, state, postal_code
            FROM general_profiles
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ProfileRow::into_profile))
    }
}
