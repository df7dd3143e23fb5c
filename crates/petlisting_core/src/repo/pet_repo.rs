//! Pet repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide lookup, save, existence and delete APIs over the `pets` table.
//! - Encode/decode `extra_photos` as a JSON array column at this boundary.
//!
//! # Invariants
//! - `save` inserts when `id` is `None` and fully replaces when it is set.
//! - `save` never changes `owner_id` of an existing row.
//! - `save` checks, writes and reads back inside one IMMEDIATE transaction.
//! - `delete_by_id` is a single statement, so check-and-delete is atomic.
//! - Species lookup uses exact, case-sensitive equality.

use crate::model::pet::{Pet, PetId, Sex};
use crate::model::user::UserId;
use crate::repo::{ensure_table_ready, RepoError, RepoResult};
use rusqlite::{params, Connection, Params, Row, Transaction, TransactionBehavior};

const PET_SELECT_SQL: &str = "SELECT
    id,
    name,
    species,
    breed,
    age,
    sex,
    color,
    special_needs,
    vaccinated,
    sterilized,
    status,
    primary_photo_url,
    extra_photos,
    owner_id
FROM pets";

const PET_COLUMNS: &[&str] = &[
    "id",
    "name",
    "species",
    "breed",
    "age",
    "sex",
    "color",
    "special_needs",
    "vaccinated",
    "sterilized",
    "status",
    "primary_photo_url",
    "extra_photos",
    "owner_id",
];

/// Repository interface for pet persistence.
pub trait PetRepository {
    /// Returns every pet ordered by id.
    fn find_all(&self) -> RepoResult<Vec<Pet>>;
    fn find_by_id(&self, id: PetId) -> RepoResult<Option<Pet>>;
    /// Returns pets whose species equals `species` exactly, ordered by id.
    fn find_by_species(&self, species: &str) -> RepoResult<Vec<Pet>>;
    /// Inserts or replaces `pet` and returns the stored row.
    fn save(&self, pet: &Pet) -> RepoResult<Pet>;
    fn exists_by_id(&self, id: PetId) -> RepoResult<bool>;
    /// Deletes one pet. Returns `false` when no row matched.
    fn delete_by_id(&self, id: PetId) -> RepoResult<bool>;
}

/// SQLite-backed pet repository.
pub struct SqlitePetRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePetRepository<'conn> {
    /// Constructs a repository from a migrated connection.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_table_ready(conn, "pets", PET_COLUMNS)?;
        Ok(Self { conn })
    }
}

impl PetRepository for SqlitePetRepository<'_> {
    fn find_all(&self) -> RepoResult<Vec<Pet>> {
        query_pets(self.conn, &format!("{PET_SELECT_SQL} ORDER BY id ASC;"), [])
    }

    fn find_by_id(&self, id: PetId) -> RepoResult<Option<Pet>> {
        find_pet(self.conn, id)
    }

    fn find_by_species(&self, species: &str) -> RepoResult<Vec<Pet>> {
        query_pets(
            self.conn,
            &format!("{PET_SELECT_SQL} WHERE species = ?1 ORDER BY id ASC;"),
            [species],
        )
    }

    fn save(&self, pet: &Pet) -> RepoResult<Pet> {
        let tx = Transaction::new_unchecked(self.conn, TransactionBehavior::Immediate)?;
        let id = match pet.id {
            Some(id) => {
                replace(&tx, id, pet)?;
                id
            }
            None => {
                if !owner_exists(&tx, pet.owner_id)? {
                    return Err(RepoError::OwnerNotFound(pet.owner_id));
                }
                insert(&tx, pet)?
            }
        };

        let stored = find_pet(&tx, id)?
            .ok_or_else(|| RepoError::InvalidData(format!("pet {id} missing after save")))?;
        tx.commit()?;
        Ok(stored)
    }

    fn exists_by_id(&self, id: PetId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM pets WHERE id = ?1);",
            [id],
            |row| row.get(0),
        )?;
        Ok(exists == 1)
    }

    fn delete_by_id(&self, id: PetId) -> RepoResult<bool> {
        let changed = self.conn.execute("DELETE FROM pets WHERE id = ?1;", [id])?;
        Ok(changed > 0)
    }
}

fn insert(conn: &Connection, pet: &Pet) -> RepoResult<PetId> {
    let extra_photos = encode_extra_photos(pet.extra_photos.as_deref())?;
    conn.execute(
        "INSERT INTO pets (
            name,
            species,
            breed,
            age,
            sex,
            color,
            special_needs,
            vaccinated,
            sterilized,
            status,
            primary_photo_url,
            extra_photos,
            owner_id
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13);",
        params![
            pet.name.as_deref(),
            pet.species.as_deref(),
            pet.breed.as_deref(),
            pet.age.as_deref(),
            pet.sex.map(Sex::as_str),
            pet.color.as_deref(),
            pet.special_needs.as_deref(),
            pet.vaccinated,
            pet.sterilized,
            pet.status.as_deref(),
            pet.primary_photo_url.as_deref(),
            extra_photos,
            pet.owner_id,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

fn replace(conn: &Connection, id: PetId, pet: &Pet) -> RepoResult<()> {
    let extra_photos = encode_extra_photos(pet.extra_photos.as_deref())?;
    let changed = conn.execute(
        "UPDATE pets
         SET
            name = ?1,
            species = ?2,
            breed = ?3,
            age = ?4,
            sex = ?5,
            color = ?6,
            special_needs = ?7,
            vaccinated = ?8,
            sterilized = ?9,
            status = ?10,
            primary_photo_url = ?11,
            extra_photos = ?12,
            updated_at = (strftime('%s', 'now') * 1000)
         WHERE id = ?13;",
        params![
            pet.name.as_deref(),
            pet.species.as_deref(),
            pet.breed.as_deref(),
            pet.age.as_deref(),
            pet.sex.map(Sex::as_str),
            pet.color.as_deref(),
            pet.special_needs.as_deref(),
            pet.vaccinated,
            pet.sterilized,
            pet.status.as_deref(),
            pet.primary_photo_url.as_deref(),
            extra_photos,
            id,
        ],
    )?;

    if changed == 0 {
        return Err(RepoError::NotFound(id));
    }

    Ok(())
}

fn query_pets<P: Params>(conn: &Connection, sql: &str, params: P) -> RepoResult<Vec<Pet>> {
    let mut stmt = conn.prepare(sql)?;
    let mut rows = stmt.query(params)?;
    let mut pets = Vec::new();
    while let Some(row) = rows.next()? {
        pets.push(parse_pet_row(row)?);
    }
    Ok(pets)
}

fn find_pet(conn: &Connection, id: PetId) -> RepoResult<Option<Pet>> {
    let mut pets = query_pets(conn, &format!("{PET_SELECT_SQL} WHERE id = ?1;"), [id])?;
    Ok(pets.pop())
}

fn owner_exists(conn: &Connection, owner_id: UserId) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM users WHERE id = ?1);",
        [owner_id],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

/// Encodes the extra photo list into its column representation.
///
/// `None` maps to SQL `NULL`; a list (even an empty one) maps to a JSON array.
pub fn encode_extra_photos(photos: Option<&[String]>) -> RepoResult<Option<String>> {
    photos
        .map(|list| {
            serde_json::to_string(list).map_err(|err| {
                RepoError::InvalidData(format!("cannot encode pets.extra_photos: {err}"))
            })
        })
        .transpose()
}

/// Decodes the `extra_photos` column back into an ordered list.
pub fn decode_extra_photos(value: Option<String>) -> RepoResult<Option<Vec<String>>> {
    value
        .map(|text| {
            serde_json::from_str::<Vec<String>>(&text).map_err(|err| {
                RepoError::InvalidData(format!(
                    "invalid json `{text}` in pets.extra_photos: {err}"
                ))
            })
        })
        .transpose()
}

fn parse_pet_row(row: &Row<'_>) -> RepoResult<Pet> {
    let sex = match row.get::<_, Option<String>>("sex")? {
        Some(value) => Some(Sex::parse(&value).ok_or_else(|| {
            RepoError::InvalidData(format!("invalid sex `{value}` in pets.sex"))
        })?),
        None => None,
    };

    Ok(Pet {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        species: row.get("species")?,
        breed: row.get("breed")?,
        age: row.get("age")?,
        sex,
        color: row.get("color")?,
        special_needs: row.get("special_needs")?,
        vaccinated: parse_flag(row, "vaccinated")?,
        sterilized: parse_flag(row, "sterilized")?,
        status: row.get("status")?,
        primary_photo_url: row.get("primary_photo_url")?,
        extra_photos: decode_extra_photos(row.get("extra_photos")?)?,
        owner_id: row.get("owner_id")?,
    })
}

fn parse_flag(row: &Row<'_>, column: &'static str) -> RepoResult<Option<bool>> {
    match row.get::<_, Option<i64>>(column)? {
        None => Ok(None),
        Some(0) => Ok(Some(false)),
        Some(1) => Ok(Some(true)),
        Some(other) => Err(RepoError::InvalidData(format!(
            "invalid flag value `{other}` in pets.{column}"
        ))),
    }
}
