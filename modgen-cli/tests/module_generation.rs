//! Integration tests for module generation and server bootstrap

use modgen::ModgenConfig;
use modgen_cli_lib::{bootstrap, ModuleGenerator, SchemaLookup, TemplateStore, BOOTSTRAP_FILES};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SCHEMA: &str = r#"
generator client {
  provider = "prisma-client-js"
}

datasource db {
  provider = "postgresql"
  url      = env("DATABASE_URL")
}

model Product {
  id        Int      @id @default(autoincrement())
  name      String
  price     Float
  inStock   Boolean  @default(true)
  meta      Json?
  category  Category
  createdAt DateTime @default(now())
  orders    Order[]
  owner     User     @relation(fields: [ownerId], references: [id])
  ownerId   Int

  @@index([name])
}

enum Category {
  FOOD
  TOOLS
}
"#;

const EXPECTED_FIELDS: &str = "  id: number;\n  name: string;\n  price: number;\n  inStock: boolean;\n  meta?: any;\n  category: Category;\n  createdAt: Date;\n  orders: Order[];\n  ownerId: number;\n";

const MODULE_FILES: [&str; 7] = [
    "src/services/ProductServices/DeleteProductService.ts",
    "src/services/ProductServices/ListProductService.ts",
    "src/services/ProductServices/ShowProductService.ts",
    "src/services/ProductServices/StoreProductService.ts",
    "src/services/ProductServices/UpdateProductService.ts",
    "src/controllers/ProductController.ts",
    "src/routes/productRoutes.ts",
];

fn project_with_schema() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let prisma = temp_dir.path().join("prisma");
    fs::create_dir_all(&prisma).unwrap();
    fs::write(prisma.join("schema.prisma"), SCHEMA).unwrap();
    temp_dir
}

fn config_for(root: &Path) -> ModgenConfig {
    let mut config = ModgenConfig::default();
    config.output.root = root.to_path_buf();
    config
}

fn generate(config: &ModgenConfig, name: &str) -> modgen_cli_lib::GenerationReport {
    let lookup = SchemaLookup::locate(&config.schema_candidates());
    ModuleGenerator::new(
        name.to_string(),
        config.output.root.clone(),
        TemplateStore::new(config.template_dir()),
    )
    .unwrap()
    .with_schema(&lookup)
    .generate()
    .unwrap()
}

/// Test that every module file is generated with the schema's fields
#[test]
fn test_module_files_generated_from_schema() {
    let temp_dir = project_with_schema();
    let config = config_for(temp_dir.path());

    let report = generate(&config, "product");

    let generated: Vec<PathBuf> = report.generated.iter().map(|f| f.path.clone()).collect();
    let expected: Vec<PathBuf> = MODULE_FILES.iter().map(PathBuf::from).collect();
    assert_eq!(generated, expected);

    for file in MODULE_FILES {
        let path = temp_dir.path().join(file);
        assert!(path.is_file(), "File should exist: {}", path.display());
    }

    let store = fs::read_to_string(
        temp_dir
            .path()
            .join("src/services/ProductServices/StoreProductService.ts"),
    )
    .unwrap();
    assert!(store.contains(&format!("export interface StoreProductData {{\n{EXPECTED_FIELDS}}}")));
    assert!(!store.contains("owner:"));

    let routes = fs::read_to_string(temp_dir.path().join("src/routes/productRoutes.ts")).unwrap();
    assert!(routes.contains("productRoutes.get(\"/products\""));
    assert!(routes.contains("../controllers/ProductController"));

    let controller =
        fs::read_to_string(temp_dir.path().join("src/controllers/ProductController.ts")).unwrap();
    assert!(controller.contains("../services/ProductServices/ListProductService"));
}

/// Test that a second run leaves every file alone
#[test]
fn test_second_run_skips_existing_files() {
    let temp_dir = project_with_schema();
    let config = config_for(temp_dir.path());

    generate(&config, "product");
    let route = temp_dir.path().join("src/routes/productRoutes.ts");
    fs::write(&route, "edited by hand").unwrap();

    let report = generate(&config, "product");
    assert!(report.generated.is_empty());
    assert_eq!(report.skipped.len(), MODULE_FILES.len());
    assert_eq!(fs::read_to_string(route).unwrap(), "edited by hand");
}

/// Test that generation without any schema still renders every template
#[test]
fn test_generation_without_schema() {
    let temp_dir = TempDir::new().unwrap();
    let config = config_for(temp_dir.path());

    let report = generate(&config, "order-item");
    assert_eq!(report.generated.len(), 7);

    let list = fs::read_to_string(
        temp_dir
            .path()
            .join("src/services/OrderItemServices/ListOrderItemService.ts"),
    )
    .unwrap();
    assert!(list.contains("export interface OrderItemRecord {\n}"));
    assert!(list.contains("const [order-items, count]"));
}

/// Test that a broken schema degrades to field-less generation
#[test]
fn test_unterminated_schema_is_ignored() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("schema.prisma"), "model Product {\n  id Int\n").unwrap();
    let config = config_for(temp_dir.path());

    let report = generate(&config, "product");
    assert_eq!(report.generated.len(), 7);

    let show = fs::read_to_string(
        temp_dir
            .path()
            .join("src/services/ProductServices/ShowProductService.ts"),
    )
    .unwrap();
    assert!(show.contains("export interface ProductRecord {\n}"));
}

/// Test that files in the templates directory replace built-ins
#[test]
fn test_template_override_dir() {
    let temp_dir = project_with_schema();
    let overrides = temp_dir.path().join("tpl");
    fs::create_dir_all(&overrides).unwrap();
    fs::write(
        overrides.join("route.ts.tpl"),
        "// {{Model}} at /{{modelPlural}} ({{unknown}})\n",
    )
    .unwrap();

    let mut config = config_for(temp_dir.path());
    config.templates.dir = Some(PathBuf::from("tpl"));

    generate(&config, "product");

    let routes = fs::read_to_string(temp_dir.path().join("src/routes/productRoutes.ts")).unwrap();
    assert_eq!(routes, "// Product at /products ({{unknown}})\n");

    let delete = fs::read_to_string(
        temp_dir
            .path()
            .join("src/services/ProductServices/DeleteProductService.ts"),
    )
    .unwrap();
    assert!(delete.contains("export const DeleteProductService"));
}

/// Test that init writes every bootstrap file under src/
#[test]
fn test_init_writes_bootstrap_files() {
    let temp_dir = TempDir::new().unwrap();

    let report = bootstrap(temp_dir.path(), &TemplateStore::default()).unwrap();
    assert_eq!(report.written.len(), 11);

    for file in BOOTSTRAP_FILES {
        let path = temp_dir.path().join(file.output);
        assert_eq!(fs::read_to_string(&path).unwrap(), file.content);
    }

    let again = bootstrap(temp_dir.path(), &TemplateStore::default()).unwrap();
    assert!(again.written.is_empty());
    assert_eq!(again.skipped.len(), 11);
}

/// Test that the bootstrapped schema can drive module generation
#[test]
fn test_init_then_add_user() {
    let temp_dir = TempDir::new().unwrap();
    bootstrap(temp_dir.path(), &TemplateStore::default()).unwrap();

    let config = config_for(temp_dir.path());
    generate(&config, "user");

    let store = fs::read_to_string(
        temp_dir
            .path()
            .join("src/services/UserServices/StoreUserService.ts"),
    )
    .unwrap();
    assert!(store.contains("  email: string;\n"));
    assert!(store.contains("  role: Role;\n"));
    assert!(store.contains("  createdAt: Date;\n"));
}
