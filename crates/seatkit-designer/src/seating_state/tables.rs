//! Table lifecycle, placement and configuration.

use seatkit_core::{TableId, ValidationError};

use super::SeatingState;
use crate::commands::TableConfigUpdate;
use crate::model::{check_dimension, check_finite, Table, TableShape, TableType};

impl SeatingState {
    /// Creates a table with the defaults of its type. A blank name becomes `Table N`.
    pub fn add_table(
        &mut self,
        table_type: TableType,
        name: Option<&str>,
        x: f64,
        y: f64,
    ) -> Result<TableId, ValidationError> {
        check_finite("x", x)?;
        check_finite("y", y)?;

        let name = match name.map(str::trim) {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => self.layout.next_table_name(),
        };
        let table = Table::new(table_type, name, x, y);
        let id = table.id;
        tracing::debug!(
            "Adding {} table '{}' with {} seats",
            table_type,
            table.name,
            table.seats.len()
        );
        self.layout.tables.push(table);
        Ok(id)
    }

    /// Deletes a table. Returns how many seated guests went back to the pool.
    pub fn remove_table(&mut self, table_id: TableId) -> Option<usize> {
        let Some(index) = self.layout.tables.iter().position(|t| t.id == table_id) else {
            tracing::debug!("remove_table: unknown table {}", table_id.short());
            return None;
        };

        let table = self.layout.tables.remove(index);
        let before = self.layout.unassigned_guests.len();
        self.layout.unassigned_guests.extend(table.seated_guests());
        Some(self.layout.unassigned_guests.len() - before)
    }

    pub fn update_table_position(
        &mut self,
        table_id: TableId,
        x: f64,
        y: f64,
    ) -> Result<bool, ValidationError> {
        check_finite("x", x)?;
        check_finite("y", y)?;
        let Some(table) = self.layout.table_mut(table_id) else {
            tracing::debug!("update_table_position: unknown table {}", table_id.short());
            return Ok(false);
        };
        if table.x == x && table.y == y {
            return Ok(false);
        }
        table.x = x;
        table.y = y;
        Ok(true)
    }

    pub fn update_table_rotation(
        &mut self,
        table_id: TableId,
        rotation: f64,
    ) -> Result<bool, ValidationError> {
        check_finite("rotation", rotation)?;
        let Some(table) = self.layout.table_mut(table_id) else {
            tracing::debug!("update_table_rotation: unknown table {}", table_id.short());
            return Ok(false);
        };
        if table.rotation == rotation {
            return Ok(false);
        }
        table.rotation = rotation;
        Ok(true)
    }

    /// Applies a partial configuration in one step.
    ///
    /// Placement, size and seat layout may change together. When the seat count changes,
    /// seats at positions below the new count keep their id and occupant; guests on removed
    /// seats are appended to the unassigned pool.
    pub fn update_table_config(
        &mut self,
        table_id: TableId,
        update: &TableConfigUpdate,
    ) -> Result<bool, ValidationError> {
        if let Some(x) = update.x {
            check_finite("x", x)?;
        }
        if let Some(y) = update.y {
            check_finite("y", y)?;
        }
        if let Some(rotation) = update.rotation {
            check_finite("rotation", rotation)?;
        }
        if let Some(width) = update.width {
            check_dimension("width", width)?;
        }
        if let Some(height) = update.height {
            check_dimension("height", height)?;
        }
        if let Some(name) = &update.name {
            if name.trim().is_empty() {
                return Err(ValidationError::EmptyField { field: "name" });
            }
        }

        let Some(current) = self.layout.table(table_id) else {
            tracing::debug!("update_table_config: unknown table {}", table_id.short());
            return Ok(false);
        };

        let mut shape = current.shape.clone();
        apply_layout_parameters(&mut shape, update);
        shape.seat_count()?;

        let mut table = current.clone();
        table.shape = shape;
        if let Some(name) = &update.name {
            table.name = name.trim().to_string();
        }
        if let Some(x) = update.x {
            table.x = x;
        }
        if let Some(y) = update.y {
            table.y = y;
        }
        if let Some(rotation) = update.rotation {
            table.rotation = rotation;
        }
        if let Some(width) = update.width {
            table.width = width;
        }
        if let Some(height) = update.height {
            table.height = height;
        }
        let released = table.reconcile_seats()?;

        if &table == current {
            return Ok(false);
        }
        if !released.is_empty() {
            tracing::debug!(
                "Resizing {} released {} guests",
                table_id.short(),
                released.len()
            );
        }

        if let Some(slot) = self.layout.table_mut(table_id) {
            *slot = table;
        }
        self.layout.unassigned_guests.extend(released);
        Ok(true)
    }
}

fn apply_layout_parameters(shape: &mut TableShape, update: &TableConfigUpdate) {
    match shape {
        TableShape::Round { seat_count }
        | TableShape::Square { seat_count }
        | TableShape::Rectangle { seat_count } => {
            if let Some(count) = update.seat_count {
                *seat_count = count;
            }
        }
        TableShape::Theater {
            rows,
            seats_per_row,
        } => {
            if let Some(r) = update.rows {
                *rows = r;
            }
            if let Some(s) = update.seats_per_row {
                *seats_per_row = s;
            }
        }
        TableShape::Amphitheater { row_configs } => {
            if let Some(configs) = &update.row_configs {
                *row_configs = configs.clone();
            }
        }
    }
}
