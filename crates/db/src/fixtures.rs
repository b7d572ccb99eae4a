//! Static site content.
//!
//! Serves the in-memory store, the Postgres store's read fallback, and
//! database seeding. Ids are short literals so seeding stays idempotent.

use agronet_core::types::Timestamp;
use chrono::DateTime;
use rust_decimal::Decimal;

use crate::models::coverage_area::{CoverageArea, CoverageStatus};
use crate::models::faq::Faq;
use crate::models::lead::Lead;
use crate::models::plan::{Plan, PlanType};
use crate::models::site_setting::SiteSetting;
use crate::models::testimonial::Testimonial;

/// 2025-01-01T00:00:00Z, stamped on every fixture row.
const PUBLISHED_AT_SECS: i64 = 1_735_689_600;

/// Creation and update time of every fixture row.
///
/// Fixed so fallback reads return the same timestamps every time.
pub fn published_at() -> Timestamp {
    DateTime::from_timestamp(PUBLISHED_AT_SECS, 0).unwrap_or_default()
}

/// A complete set of site rows, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct SiteData {
    pub plans: Vec<Plan>,
    pub leads: Vec<Lead>,
    pub coverage_areas: Vec<CoverageArea>,
    pub testimonials: Vec<Testimonial>,
    pub faqs: Vec<Faq>,
    pub site_settings: Vec<SiteSetting>,
}

/// Every fixture table. There are no fixture leads.
pub fn site_data() -> SiteData {
    SiteData {
        plans: plans(),
        leads: Vec::new(),
        coverage_areas: coverage_areas(),
        testimonials: testimonials(),
        faqs: faqs(),
        site_settings: site_settings(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[allow(clippy::too_many_arguments)]
fn plan(
    now: Timestamp,
    id: &str,
    name: &str,
    plan_type: PlanType,
    speed: i32,
    price_cents: i64,
    features: &[&str],
    is_popular: bool,
    banner_order: i32,
) -> Plan {
    Plan {
        id: id.to_string(),
        name: name.to_string(),
        plan_type,
        speed,
        price: Decimal::new(price_cents, 2),
        features: strings(features),
        is_popular,
        is_active: true,
        banner_image: None,
        banner_order: Some(banner_order),
        created_at: now,
        updated_at: now,
    }
}

pub fn plans() -> Vec<Plan> {
    let now = published_at();
    vec![
        plan(
            now,
            "1",
            "Fibra 300",
            PlanType::Fiber,
            300,
            9990,
            &[
                "Velocidade de 300 Mbps de download",
                "150 Mbps de upload",
                "Wi-Fi de alta performance incluso",
                "Sem limite de dados",
                "Instalação grátis",
            ],
            false,
            0,
        ),
        plan(
            now,
            "2",
            "Fibra 400",
            PlanType::Fiber,
            400,
            11990,
            &[
                "Velocidade de 400 Mbps de download",
                "200 Mbps de upload",
                "Roteador Wi-Fi 6 de alta performance",
                "Suporte prioritário 24/7",
                "Instalação expressa grátis",
                "IP fixo opcional",
            ],
            true,
            1,
        ),
        plan(
            now,
            "3",
            "Rádio 50",
            PlanType::Radio,
            50,
            11990,
            &[
                "Velocidade de 50 Mbps de download",
                "20 Mbps de upload",
                "Equipamento resistente a intempéries",
                "Ideal para áreas sem cobertura de fibra",
                "Instalação especializada inclusa",
            ],
            false,
            2,
        ),
    ]
}

pub fn coverage_areas() -> Vec<CoverageArea> {
    let now = published_at();
    let area = |id: &str, name: &str, zips: &[&str], has_fiber: bool| CoverageArea {
        id: id.to_string(),
        name: name.to_string(),
        zip_codes: strings(zips),
        has_fiber,
        has_radio: true,
        status: CoverageStatus::Active,
        created_at: now,
        updated_at: now,
    };

    vec![
        area("1", "Balsas - MA (Centro)", &["65800000", "65800-000"], true),
        area(
            "2",
            "Zona rural de Balsas - até 40km da cidade",
            &["65800100", "65800200"],
            false,
        ),
        area(
            "3",
            "Distritos e comunidades rurais de Balsas",
            &["65810000", "65820000"],
            false,
        ),
    ]
}

pub fn testimonials() -> Vec<Testimonial> {
    let now = published_at();
    let testimonial = |id: &str, name: &str, location: &str, comment: &str, rating: f64| {
        Testimonial {
            id: id.to_string(),
            name: name.to_string(),
            location: location.to_string(),
            comment: comment.to_string(),
            rating,
            is_active: true,
            image_url: None,
            created_at: now,
            updated_at: now,
        }
    };

    vec![
        testimonial(
            "1",
            "João Carlos",
            "Fazenda Santa Luzia",
            "Depois de anos sofrendo com internet instável, finalmente temos uma conexão \
             confiável na fazenda. As videoconferências não caem mais e consigo gerenciar meu \
             negócio sem preocupações.",
            5.0,
        ),
        testimonial(
            "2",
            "Maria Aparecida",
            "Sítio Boa Esperança",
            "Meus filhos precisavam de internet boa para estudar online e nenhuma operadora \
             chegava até nossa região. A AGRONET foi a única que resolveu nosso problema com um \
             plano que atende toda família.",
            5.0,
        ),
        testimonial(
            "3",
            "Pedro Santos",
            "Centro",
            "O atendimento é o diferencial. Tive um problema no final de semana e o técnico veio \
             no mesmo dia. A velocidade é excelente e nunca tive problemas de oscilação, mesmo em \
             dias de chuva forte.",
            4.5,
        ),
    ]
}

pub fn faqs() -> Vec<Faq> {
    let now = published_at();
    let faq = |id: &str, question: &str, answer: &str, category: &str, order: i32| Faq {
        id: id.to_string(),
        question: question.to_string(),
        answer: answer.to_string(),
        category: Some(category.to_string()),
        order,
        is_active: true,
        created_at: now,
        updated_at: now,
    };

    vec![
        faq(
            "1",
            "Como sei se minha região tem cobertura?",
            "Informe seu CEP no verificador de cobertura ou fale com um consultor pelo WhatsApp.",
            "cobertura",
            1,
        ),
        faq(
            "2",
            "Qual a diferença entre fibra e rádio?",
            "A fibra chega por cabo óptico e oferece as maiores velocidades. O rádio atende \
             áreas rurais onde a fibra ainda não chega.",
            "planos",
            2,
        ),
        faq(
            "3",
            "A instalação é cobrada?",
            "A instalação é gratuita em todos os planos.",
            "instalacao",
            3,
        ),
    ]
}

pub fn site_settings() -> Vec<SiteSetting> {
    let now = published_at();
    let setting = |id: &str, key: &str, value: &str| SiteSetting {
        id: id.to_string(),
        key: key.to_string(),
        value: value.to_string(),
        created_at: now,
        updated_at: now,
    };

    vec![
        setting("1", "whatsapp_number", "559991557588"),
        setting("2", "company_name", "AGRONET"),
    ]
}
