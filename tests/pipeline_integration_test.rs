use anyhow::Result;
use fapesp_opportunities::{engine, run, KeywordSet, OpportunityError, SearchConfig};
use httpmock::prelude::*;
use std::time::Duration;

const LISTING: &str = r#"<!DOCTYPE html>
<html lang="pt-br">
<head><title>Oportunidades - FAPESP</title></head>
<body>
<ul class="list">
  <li class="box_col aberta">
    <a class="link_col" href="/oportunidades/bolsa-de-pd-em-redes-neurais/">
      <strong class="title">Bolsa de PD em redes neurais</strong>
      <span class="text-resumo">Aprendizado de máquina para sinais biomédicos.</span>
    </a>
    <p><strong>Cidade:</strong> São Carlos</p>
    <p><strong>Instituição:</strong> Universidade de São Paulo</p>
    <p>Inscrições até: 28/02/2025</p>
  </li>
  <li class="box_col aberta">
    <a class="link_col" href="https://outro.org/edital">
      <strong class="title">Auxílio Jovem Pesquisador</strong>
      <span class="text-resumo">Visão computacional em agricultura.</span>
    </a>
    <p><strong>Cidade:</strong> Campinas</p>
    <p>Inscrições até: 15/01/2025</p>
  </li>
  <li class="box_col aberta">
    <a class="link_col" href="/oportunidades/bolsa-de-tt/">
      <strong class="title">Bolsa de TT em química</strong>
      <span class="text-resumo">Síntese orgânica.</span>
    </a>
    <p><strong>Instituição:</strong> Unesp</p>
  </li>
  <li class="box_col encerrada">
    <a class="link_col" href="/oportunidades/bolsa-encerrada/">
      <strong class="title">Bolsa de PD encerrada</strong>
    </a>
    <p>Inscrições até: 01/01/2024</p>
  </li>
</ul>
</body>
</html>"#;

fn config_for(url: String, titles: &[&str], contents: &[&str]) -> SearchConfig {
    SearchConfig {
        title_filters: titles.iter().copied().collect(),
        content_filters: contents.iter().copied().collect(),
        ..SearchConfig::unfiltered(url)
    }
}

fn serve_listing(server: &MockServer) -> httpmock::Mock<'_> {
    server.mock(|when, then| {
        when.method(GET).path("/oportunidades/mais-recentes/");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(LISTING);
    })
}

#[tokio::test]
async fn test_end_to_end_title_filter() -> Result<()> {
    let server = MockServer::start();
    let page_mock = serve_listing(&server);

    let config = config_for(server.url("/oportunidades/mais-recentes/"), &["Bolsa"], &[]);
    let records = run(&config).await?;

    page_mock.assert();
    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.title.contains("Bolsa")));
    assert!(records.iter().all(|r| !r.title.is_empty() && !r.link.is_empty()));
    assert!(records.iter().all(|r| !r.title.contains("encerrada")));

    // 有截止日期的排在前面
    let first = &records[0];
    assert_eq!(first.title, "Bolsa de PD em redes neurais");
    assert_eq!(first.end_date, "28/02/2025");
    assert_eq!(first.city, "São Carlos");
    assert_eq!(first.institute, "Universidade de São Paulo");
    assert_eq!(
        first.link,
        server.url("/oportunidades/bolsa-de-pd-em-redes-neurais/")
    );

    let second = &records[1];
    assert_eq!(second.title, "Bolsa de TT em química");
    assert!(second.end_date.is_empty());
    assert!(second.city.is_empty());
    assert_eq!(second.institute, "Unesp");

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_unfiltered_orders_by_deadline() -> Result<()> {
    let server = MockServer::start();
    serve_listing(&server);

    let records = run(&config_for(server.url("/oportunidades/mais-recentes/"), &[], &[])).await?;

    let deadlines: Vec<&str> = records.iter().map(|r| r.end_date.as_str()).collect();
    assert_eq!(deadlines, vec!["15/01/2025", "28/02/2025", ""]);
    assert_eq!(records[0].link, "https://outro.org/edital");

    Ok(())
}

#[tokio::test]
async fn test_end_to_end_content_filter() -> Result<()> {
    let server = MockServer::start();
    serve_listing(&server);

    // "VISÃO" só aparece no resumo do auxílio
    let config = config_for(
        server.url("/oportunidades/mais-recentes/"),
        &[],
        &["VISÃO COMPUTACIONAL"],
    );
    let records = run(&config).await?;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Auxílio Jovem Pesquisador");

    let both = config_for(
        server.url("/oportunidades/mais-recentes/"),
        &["Bolsa"],
        &["visão computacional"],
    );
    assert!(run(&both).await?.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_page_without_list_is_empty_result() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/vazio");
        then.status(200).body("<html><body><p>Nenhuma oportunidade.</p></body></html>");
    });

    let records = run(&SearchConfig::unfiltered(server.url("/vazio"))).await?;
    assert!(records.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_server_error_is_fatal() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/failed");
        then.status(500);
    });

    let result = run(&SearchConfig::unfiltered(server.url("/failed"))).await;

    api_mock.assert_hits(1);
    assert!(matches!(
        result,
        Err(OpportunityError::HttpStatus { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_unreachable_host_is_transport_error() {
    let result = run(&SearchConfig::unfiltered("http://127.0.0.1:1/oportunidades/")).await;
    assert!(matches!(result, Err(OpportunityError::Transport { .. })));
}

#[tokio::test]
async fn test_invalid_config_is_rejected_before_fetching() {
    let mut config = SearchConfig::unfiltered("ftp://fapesp.br/");
    config.title_filters = KeywordSet::new();

    let result = run(&config).await;
    assert!(matches!(
        result,
        Err(OpportunityError::InvalidConfigValueError { .. })
    ));
}

#[tokio::test]
async fn test_overlapping_search_on_shared_engine_is_busy() -> Result<()> {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/oportunidades/mais-recentes/");
        then.status(200)
            .header("Content-Type", "text/html; charset=utf-8")
            .body(LISTING)
            .delay(Duration::from_millis(300));
    });

    let engine = engine(&config_for(server.url("/oportunidades/mais-recentes/"), &["Bolsa"], &[]))?;

    let (first, second) = tokio::join!(engine.run(), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        engine.run().await
    });

    assert_eq!(first?.len(), 2);
    assert!(matches!(second, Err(OpportunityError::Busy)));
    page_mock.assert_hits(1);

    // 上一次結束後可以再跑
    assert_eq!(engine.run().await?.len(), 2);
    page_mock.assert_hits(2);

    Ok(())
}
