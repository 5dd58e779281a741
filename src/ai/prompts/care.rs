use anyhow::{anyhow, Context};
use serde_json::Value;

use super::Prompt;
use crate::domain::{CareProfile, PlantName};

/// Key the model uses to say the name isn't a plant.
const NOT_FOUND_KEY: &str = "erro";

pub const NOT_FOUND_MESSAGE: &str = "Planta não encontrada";

pub struct CarePrompt {
    plant_name: PlantName,
}

/// What the model said about a plant name.
#[derive(Debug, PartialEq)]
pub enum CareReply {
    Found(CareProfile),
    NotFound(String),
}

impl CarePrompt {
    pub fn new(plant_name: PlantName) -> Self {
        Self { plant_name }
    }
}

impl Prompt for CarePrompt {
    type Response = CareReply;

    fn build_prompt(&self) -> String {
        build_care_prompt(self.plant_name.as_str())
    }

    fn parse_response(&self, raw_response: &str) -> anyhow::Result<CareReply> {
        parse_care_reply(raw_response)
    }
}

pub fn build_care_prompt(name: &str) -> String {
    format!(
        r#"Atue como um especialista em botânica. Sua tarefa é retornar dados sobre uma planta em um formato JSON estrito. Não adicione nenhuma explicação ou texto fora do JSON.

A planta é: "{name}"

Se o texto fornecido não for um nome de planta conhecido (popular ou científico), retorne exatamente: {{"{NOT_FOUND_KEY}": "{NOT_FOUND_MESSAGE}"}}.

Se for uma planta válida, forneça os seguintes dados:
- "luminosidade_ideal_lux": Um objeto JSON com os valores mínimo e máximo de luminosidade em lux (lúmens por metro quadrado). Os valores devem ser números inteiros. Exemplo: {{"min": 10000, "max": 25000}}.
- "umidade_ar_ideal": Uma string com a faixa de umidade do ar em porcentagem (ex: "60-80%").
- "metodo_irrigacao_ideal": Responda apenas com "gotejamento" ou "agendado".
- "horarios_umidade_solo": Um objeto JSON com até 4 horários chave e a umidade do solo alvo em porcentagem. Use o formato {{"HH:MM": "%", "HH:MM": "%", ...}}.
- "temperatura_ideal_celsius": Uma string com a faixa de temperatura ideal em graus Celsius (ex: "18-25°C").
- "tipo_planta": Uma string com a classificação da planta (ex: "Folhagem", "Hortaliça", "Bulbo", "Suculenta").

O JSON de saída deve ser exatamente neste formato, sem ```json ou qualquer outra formatação:
{{
  "luminosidade_ideal_lux": {{"min": 0, "max": 0}},
  "umidade_ar_ideal": "...",
  "metodo_irrigacao_ideal": "...",
  "horarios_umidade_solo": {{"06:00": "70%"}},
  "temperatura_ideal_celsius": "...",
  "tipo_planta": "..."
}}"#
    )
}

/// Strips any code fence, then decides between the not found marker and a
/// full care profile.  Anything else is an error.
fn parse_care_reply(raw_response: &str) -> anyhow::Result<CareReply> {
    let cleaned = super::strip_code_fences(raw_response);

    let value: Value = serde_json::from_str(&cleaned)
        .with_context(|| format!("reply is not valid json: {raw_response:?}"))?;

    if let Some(message) = value.get(NOT_FOUND_KEY) {
        let message = match message {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };

        return Ok(CareReply::NotFound(message));
    }

    if !value.is_object() {
        return Err(anyhow!("reply is not a json object: {raw_response:?}"));
    }

    let profile: CareProfile = serde_json::from_value(value)
        .with_context(|| format!("reply does not match the care profile: {raw_response:?}"))?;

    Ok(CareReply::Found(profile))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IrrigationMethod, LuxRange};

    const SUCCULENT: &str = r#"{"luminosidade_ideal_lux": {"min": 10000, "max": 25000}, "umidade_ar_ideal": "60-80%", "metodo_irrigacao_ideal": "gotejamento", "horarios_umidade_solo": {"06:00": "70%"}, "temperatura_ideal_celsius": "18-25°C", "tipo_planta": "Suculenta"}"#;

    fn parse(raw_response: &str) -> anyhow::Result<CareReply> {
        let prompt = CarePrompt::new(PlantName::parse("Echeveria").unwrap());
        prompt.parse_response(raw_response)
    }

    #[test]
    fn test_prompt_contains_plant_name_verbatim() {
        let prompt = CarePrompt::new(PlantName::parse("Rosa \"alba\" {x}").unwrap());
        assert!(prompt
            .build_prompt()
            .contains(r#"A planta é: "Rosa "alba" {x}""#));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        assert_eq!(build_care_prompt("Ficus"), build_care_prompt("Ficus"));
    }

    #[test]
    fn test_prompt_describes_contract() {
        let prompt = build_care_prompt("Ficus");

        assert!(prompt.contains(r#"{"erro": "Planta não encontrada"}"#));
        assert!(prompt.contains(r#""luminosidade_ideal_lux": {"min": 0, "max": 0}"#));
        assert!(prompt.contains(r#""gotejamento" ou "agendado""#));
        assert!(!prompt.contains(r#""luminosidade_ideal":"#));
    }

    #[test]
    fn test_parse_profile() {
        let reply = parse(SUCCULENT).unwrap();

        let profile = match reply {
            CareReply::Found(profile) => profile,
            other => panic!("expected a profile, got {other:?}"),
        };
        assert_eq!(profile.light_lux, LuxRange { min: 10000, max: 25000 });
        assert_eq!(profile.irrigation, IrrigationMethod::Drip);
        assert_eq!(profile.soil_moisture_schedule.get("06:00").unwrap(), "70%");
        assert_eq!(profile.category, "Suculenta");
    }

    #[test]
    fn test_parse_fenced_profile() {
        let fenced = format!("```json\n{SUCCULENT}\n```");

        assert_eq!(parse(&fenced).unwrap(), parse(SUCCULENT).unwrap());
    }

    #[test]
    fn test_parse_fenced_not_found() {
        let reply = parse("```json\n{\"erro\": \"Planta não encontrada\"}\n```").unwrap();

        assert_eq!(reply, CareReply::NotFound(String::from("Planta não encontrada")));
    }

    #[test]
    fn test_not_found_wins_over_other_keys() {
        let reply = parse(r#"{"erro": "Nome inválido", "tipo_planta": "Folhagem"}"#).unwrap();

        assert_eq!(reply, CareReply::NotFound(String::from("Nome inválido")));
    }

    #[test]
    fn test_non_string_not_found_message() {
        let reply = parse(r#"{"erro": 404}"#).unwrap();

        assert_eq!(reply, CareReply::NotFound(String::from("404")));
    }

    #[test]
    fn test_parse_prose() {
        assert!(parse("not json at all").is_err());
    }

    #[test]
    fn test_parse_json_array() {
        assert!(parse("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_parse_old_descriptive_light_schema() {
        let reply = r#"{"luminosidade_ideal": "Sol pleno", "umidade_ar_ideal": "60-80%", "metodo_irrigacao_ideal": "gotejamento", "horarios_umidade_solo": {"06:00": "70%"}, "temperatura_ideal_celsius": "18-25°C", "tipo_planta": "Suculenta"}"#;

        assert!(parse(reply).is_err());
    }

    #[test]
    fn test_parse_unknown_irrigation_method() {
        let reply = SUCCULENT.replace("gotejamento", "aspersão");

        assert!(parse(&reply).is_err());
    }
}
