//! Cliente de consola del configurador de vehículos.
//!
//! Menú secuencial contra la API HTTP: una pregunta por respuesta, una
//! petición en vuelo, y cualquier fallo vuelve al menú.

use anyhow::Result;
use colored::*;
use serde::Deserialize;
use serde_json::json;
use std::io::{self, Write};

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Vehículo tal como lo devuelve la API
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Vehicle {
    id: i32,
    #[serde(rename = "type")]
    vehicle_type: String,
    brand: String,
    model: String,
    #[serde(default)]
    rim_options: Vec<String>,
    #[serde(default)]
    color_options: Vec<String>,
    production_year: i32,
}

#[tokio::main]
async fn main() -> Result<()> {
    let base_url =
        std::env::var("CONFIGURATOR_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let client = reqwest::Client::new();

    println!("{}", "🚗 Car Configurator CLI".bright_blue().bold());
    println!("{}", "=======================".bright_blue());

    loop {
        println!();
        println!("{}", "📋 MAIN MENU".bright_green().bold());
        println!("{}", "============".bright_green());
        println!("1. Add a new vehicle");
        println!("2. View all vehicles");
        println!("3. Delete a vehicle");
        println!("4. Add a new configuration");
        println!("5. View all configurations");
        println!("6. Delete a configuration");
        println!("7. Exit");

        let choice = prompt("Choose an option (1-7): ")?;
        let result = match choice.as_str() {
            "1" => add_vehicle(&client, &base_url).await,
            "2" => view_vehicles(&client, &base_url).await,
            "3" => delete_vehicle(&client, &base_url).await,
            "4" => add_configuration(&client, &base_url).await,
            "5" => view_configurations(&client, &base_url).await,
            "6" => delete_configuration(&client, &base_url).await,
            "7" => {
                println!("{}", "👋 Exiting CLI...".bright_green());
                break;
            }
            _ => {
                println!("{}", "❌ Invalid option, please try again.".bright_red());
                continue;
            }
        };

        // Un fallo nunca termina la sesión: se informa y se vuelve al menú
        if let Err(e) = result {
            println!("{} {}", "❌ Error:".bright_red(), e);
        }
    }

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label.bright_yellow());
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

/// Separar una lista introducida como valores separados por comas
fn parse_options(input: &str) -> Vec<String> {
    input.split(',').map(|part| part.trim().to_string()).collect()
}

/// Mostrar el cuerpo de error devuelto por la API
async fn print_api_error(action: &str, response: reqwest::Response) {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    println!(
        "{} {} ({}): {}",
        "❌ Error".bright_red(),
        action,
        status,
        body
    );
}

async fn add_vehicle(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🚗 ADD A NEW VEHICLE".bright_cyan().bold());

    let vehicle_type = prompt("Enter vehicle type (Car/Motorcycle): ")?;
    let brand = prompt("Enter vehicle brand: ")?;
    let model = prompt("Enter vehicle model: ")?;
    let motor_options = parse_options(&prompt("Enter motor options (comma-separated): ")?);
    let rim_options = parse_options(&prompt("Enter rim options (comma-separated): ")?);
    let color_options = parse_options(&prompt("Enter color options (comma-separated): ")?);
    let production_year: i32 = match prompt("Enter production year: ")?.parse() {
        Ok(year) => year,
        Err(_) => {
            println!("{}", "❌ Production year must be a number.".bright_red());
            return Ok(());
        }
    };

    let payload = json!({
        "type": vehicle_type,
        "brand": brand,
        "model": model,
        "motorOptions": motor_options,
        "rimOptions": rim_options,
        "colorOptions": color_options,
        "productionYear": production_year,
    });

    let response = client
        .post(format!("{}/vehicles", base_url))
        .json(&payload)
        .send()
        .await?;

    if response.status().is_success() {
        let created: serde_json::Value = response.json().await?;
        println!(
            "{} {}",
            "✅ Vehicle added:".bright_green(),
            serde_json::to_string_pretty(&created)?
        );
    } else {
        print_api_error("adding vehicle", response).await;
    }
    Ok(())
}

async fn view_vehicles(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🔍 VIEW VEHICLES".bright_cyan().bold());

    let vehicle_type = prompt("Filter by type (Car/Motorcycle or leave blank): ")?;
    let brand = prompt("Filter by brand (e.g., Honda or leave blank): ")?;
    let model = prompt("Filter by model (e.g., Civic or leave blank): ")?;
    let sort_by = prompt("Sort by field (e.g., productionYear, brand or leave blank): ")?;
    let order = prompt("Sort order (asc/desc or leave blank for default asc): ")?;

    let mut params: Vec<(&str, String)> = Vec::new();
    if !vehicle_type.is_empty() {
        params.push(("type", vehicle_type));
    }
    if !brand.is_empty() {
        params.push(("brand", brand));
    }
    if !model.is_empty() {
        params.push(("model", model));
    }
    if !sort_by.is_empty() {
        params.push(("sortBy", sort_by));
    }
    if !order.is_empty() {
        params.push(("order", order));
    }

    let response = client
        .get(format!("{}/vehicles", base_url))
        .query(&params)
        .send()
        .await?;

    if response.status().is_success() {
        let vehicles: Vec<Vehicle> = response.json().await?;
        if vehicles.is_empty() {
            println!("{}", "No vehicles found.".bright_yellow());
        } else {
            println!("{}", "Vehicles:".bright_green());
            for vehicle in &vehicles {
                println!(
                    "  ID: {}, Type: {}, Brand: {}, Model: {}, Year: {}",
                    vehicle.id,
                    vehicle.vehicle_type,
                    vehicle.brand,
                    vehicle.model,
                    vehicle.production_year
                );
            }
        }
    } else {
        print_api_error("retrieving vehicles", response).await;
    }
    Ok(())
}

async fn delete_vehicle(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🗑  DELETE A VEHICLE".bright_cyan().bold());

    let response = client.get(format!("{}/vehicles", base_url)).send().await?;
    if !response.status().is_success() {
        print_api_error("retrieving vehicles", response).await;
        return Ok(());
    }

    let vehicles: Vec<Vehicle> = response.json().await?;
    if vehicles.is_empty() {
        println!("{}", "No vehicles found to delete.".bright_yellow());
        return Ok(());
    }

    println!("{}", "Vehicles:".bright_green());
    for vehicle in &vehicles {
        println!(
            "  ID: {}, Type: {}, Brand: {}, Model: {}",
            vehicle.id, vehicle.vehicle_type, vehicle.brand, vehicle.model
        );
    }

    let id = prompt("Enter the vehicle ID to delete: ")?;
    let response = client
        .delete(format!("{}/vehicles/{}", base_url, id))
        .send()
        .await?;

    if response.status().is_success() {
        let body: serde_json::Value = response.json().await?;
        println!(
            "{}",
            body["message"]
                .as_str()
                .unwrap_or("Vehicle deleted.")
                .bright_green()
        );
    } else {
        print_api_error("deleting vehicle", response).await;
    }
    Ok(())
}

async fn add_configuration(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🛠  ADD A NEW CONFIGURATION".bright_cyan().bold());

    let vehicle_id: i32 = match prompt("Enter vehicle ID for the configuration: ")?.parse() {
        Ok(id) => id,
        Err(_) => {
            println!("{}", "❌ Vehicle ID must be a number.".bright_red());
            return Ok(());
        }
    };

    // Recuperar el vehículo para ofrecer sus opciones de color y llanta
    let response = client
        .get(format!("{}/vehicles/{}", base_url, vehicle_id))
        .send()
        .await?;
    if !response.status().is_success() {
        println!("{}", "Vehicle not found.".bright_red());
        return Ok(());
    }
    let vehicle: Vehicle = response.json().await?;

    println!("Available colors: {}", vehicle.color_options.join(", "));
    println!("Available rims: {}", vehicle.rim_options.join(", "));

    let color = prompt("Choose a color from the options above: ")?;
    if !vehicle.color_options.contains(&color) {
        println!("{}", "Invalid color choice.".bright_red());
        return Ok(());
    }

    let rim = prompt("Choose a rim from the options above: ")?;
    if !vehicle.rim_options.contains(&rim) {
        println!("{}", "Invalid rim choice.".bright_red());
        return Ok(());
    }

    let price: f64 = match prompt("Enter price: ")?.parse() {
        Ok(price) => price,
        Err(_) => {
            println!("{}", "❌ Price must be a number.".bright_red());
            return Ok(());
        }
    };
    let delivery_address = prompt("Enter delivery address: ")?;
    let payment_method = prompt("Enter payment method: ")?;

    let payload = json!({
        "vehicleId": vehicle_id,
        "color": color,
        "rim": rim,
        "price": price,
        "deliveryAddress": delivery_address,
        "paymentMethod": payment_method,
    });

    let response = client
        .post(format!("{}/configurations", base_url))
        .json(&payload)
        .send()
        .await?;

    if response.status().is_success() {
        let created: serde_json::Value = response.json().await?;
        println!(
            "{} {}",
            "✅ Configuration added:".bright_green(),
            serde_json::to_string_pretty(&created)?
        );
    } else {
        print_api_error("adding configuration", response).await;
    }
    Ok(())
}

async fn view_configurations(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🔍 VIEW CONFIGURATIONS".bright_cyan().bold());

    let response = client
        .get(format!("{}/configurations", base_url))
        .send()
        .await?;

    if response.status().is_success() {
        let configurations: serde_json::Value = response.json().await?;
        println!(
            "{} {}",
            "Configurations:".bright_green(),
            serde_json::to_string_pretty(&configurations)?
        );
    } else {
        print_api_error("retrieving configurations", response).await;
    }
    Ok(())
}

async fn delete_configuration(client: &reqwest::Client, base_url: &str) -> Result<()> {
    println!();
    println!("{}", "🗑  DELETE A CONFIGURATION".bright_cyan().bold());

    let id = prompt("Enter the configuration ID to delete: ")?;
    let response = client
        .delete(format!("{}/configurations/{}", base_url, id))
        .send()
        .await?;

    if response.status().is_success() {
        let body: serde_json::Value = response.json().await?;
        println!(
            "{}",
            body["message"]
                .as_str()
                .unwrap_or("Configuration deleted.")
                .bright_green()
        );
    } else {
        print_api_error("deleting configuration", response).await;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_options;

    #[test]
    fn parse_options_trims_each_value() {
        assert_eq!(
            parse_options("Red, Blue ,Black"),
            vec!["Red", "Blue", "Black"]
        );
    }
}
