use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Health,
    Auth,
    Categories,
    Calculator,
    Products,
}
