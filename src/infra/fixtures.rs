use chrono::Duration;
use rand::{seq::SliceRandom, Rng};
use rust_decimal::Decimal;

use crate::domain::models::{
    appointment::{Appointment, AppointmentStatus, NewAppointmentParams},
    catalog::Catalog,
    professional::Professional,
    service::Service,
};
use crate::domain::ports::{Clock, FixtureProvider, IdGenerator};

const FIRST_NAMES: [&str; 10] = [
    "Ana", "Bruno", "Camila", "Diego", "Eduarda", "Felipe", "Gabriela", "Henrique", "Isabela", "Lucas",
];
const LAST_NAMES: [&str; 8] = [
    "Almeida", "Barbosa", "Cardoso", "Ferreira", "Gomes", "Pereira", "Rodrigues", "Souza",
];
const AREA_CODES: [u8; 5] = [11, 21, 31, 41, 51];

/// The shop's barbers, menu and opening hours.
pub struct StaticFixtures;

impl FixtureProvider for StaticFixtures {
    fn professionals(&self) -> Vec<Professional> {
        vec![
            Professional::new(
                "1", "Carlos Silva", &["Corte Clássico", "Barba", "Degradê"], 4.9,
                "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=face",
                true,
            ),
            Professional::new(
                "2", "João Santos", &["Fade", "Barba", "Sobrancelha"], 4.8,
                "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=face",
                true,
            ),
            Professional::new(
                "3", "Miguel Costa", &["Corte Moderno", "Nevou", "Platinado"], 4.7,
                "https://images.unsplash.com/photo-1519345182560-3f2917c472ef?w=150&h=150&fit=crop&crop=face",
                false,
            ),
            Professional::new(
                "4", "Rafael Oliveira", &["Social", "Degradê", "Barba Desenhada"], 4.9,
                "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150&h=150&fit=crop&crop=face",
                true,
            ),
        ]
    }

    fn services(&self) -> Vec<Service> {
        vec![
            Service::new("1", "Corte Social", Decimal::new(25, 0), 30, "Corte clássico e elegante para o dia a dia"),
            Service::new("2", "Degradê/Fade", Decimal::new(30, 0), 45, "Corte moderno com degradê nas laterais"),
            Service::new("3", "Barba Completa", Decimal::new(20, 0), 25, "Aparar e desenhar a barba"),
            Service::new("4", "Corte + Barba", Decimal::new(40, 0), 60, "Pacote completo: corte de cabelo e barba"),
            Service::new("5", "Sobrancelha", Decimal::new(15, 0), 15, "Aparar e desenhar as sobrancelhas"),
            Service::new("6", "Nevou", Decimal::new(35, 0), 50, "Procedimento para cabelos grisalhos"),
        ]
    }

    // 08:00 through 19:30 every half hour
    fn time_slots(&self) -> Vec<String> {
        (8..20)
            .flat_map(|hour| [format!("{:02}:00", hour), format!("{:02}:30", hour)])
            .collect()
    }
}

/// Random appointments spread over the coming week, for a populated listing.
pub fn seed_appointments<R: Rng>(
    catalog: &Catalog,
    clock: &dyn Clock,
    ids: &dyn IdGenerator,
    rng: &mut R,
    count: usize,
) -> Vec<Appointment> {
    let today = clock.today();
    let statuses = [AppointmentStatus::Scheduled, AppointmentStatus::Completed, AppointmentStatus::Cancelled];
    let mut seeded = Vec::with_capacity(count);

    for _ in 0..count {
        let (Some(professional), Some(service), Some(time)) = (
            catalog.professionals().choose(rng),
            catalog.services().choose(rng),
            catalog.time_slots().choose(rng),
        ) else {
            break;
        };

        let first = FIRST_NAMES.choose(rng).copied().unwrap_or("Cliente");
        let last = LAST_NAMES.choose(rng).copied().unwrap_or("Silva");
        let area = AREA_CODES.choose(rng).copied().unwrap_or(11);

        let mut appointment = Appointment::new(NewAppointmentParams {
            id: ids.next_id(),
            professional_id: professional.id.clone(),
            service_id: service.id.clone(),
            date: today + Duration::days(rng.gen_range(0..=7)),
            time: time.clone(),
            customer_name: format!("{} {}", first, last),
            customer_phone: format!("({}) 9{:04}-{:04}", area, rng.gen_range(0..10_000), rng.gen_range(0..10_000)),
            created_at: clock.now(),
        });
        appointment.status = statuses.choose(rng).copied().unwrap_or(AppointmentStatus::Scheduled);
        seeded.push(appointment);
    }

    seeded
}
