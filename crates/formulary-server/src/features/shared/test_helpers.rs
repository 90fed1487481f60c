//! Test fixtures shared across feature query tests

use sqlx::PgPool;

pub async fn seed_category(pool: &PgPool, id: i32, name: &str) -> sqlx::Result<()> {
    sqlx::query("INSERT INTO categories (id, name) VALUES ($1, $2)")
        .bind(id)
        .bind(name)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn seed_category_described(
    pool: &PgPool,
    id: i32,
    name: &str,
    description: &str,
) -> sqlx::Result<()> {
    sqlx::query("INSERT INTO categories (id, name, description) VALUES ($1, $2, $3)")
        .bind(id)
        .bind(name)
        .bind(description)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn seed_drug(
    pool: &PgPool,
    id: i32,
    name: &str,
    category_id: i32,
    requires_prescription: bool,
) -> sqlx::Result<()> {
    sqlx::query(
        "INSERT INTO drugs (id, name, description, category_id, requires_prescription) \
         VALUES ($1, $2, $3, $4, $5)",
    )
    .bind(id)
    .bind(name)
    .bind(format!("{} description", name))
    .bind(category_id)
    .bind(requires_prescription)
    .execute(pool)
    .await?;
    Ok(())
}

pub async fn seed_side_effect(
    pool: &PgPool,
    drug_id: i32,
    effect: &str,
    kind: &str,
) -> sqlx::Result<()> {
    sqlx::query("INSERT INTO side_effects (drug_id, effect, type) VALUES ($1, $2, $3)")
        .bind(drug_id)
        .bind(effect)
        .bind(kind)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn seed_contraindication(pool: &PgPool, drug_id: i32, text: &str) -> sqlx::Result<()> {
    sqlx::query("INSERT INTO contraindications (drug_id, contraindication) VALUES ($1, $2)")
        .bind(drug_id)
        .bind(text)
        .execute(pool)
        .await?;
    Ok(())
}

pub async fn seed_interaction(
    pool: &PgPool,
    drug_id: i32,
    name: &str,
    description: &str,
    severity: Option<&str>,
) -> sqlx::Result<()> {
    sqlx::query(
        "INSERT INTO interactions (drug_id, name, description, severity) VALUES ($1, $2, $3, $4)",
    )
    .bind(drug_id)
    .bind(name)
    .bind(description)
    .bind(severity)
    .execute(pool)
    .await?;
    Ok(())
}
