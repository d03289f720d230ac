use crate::core::extractor::extract_open_entries;
use crate::core::filter::{filter_by_content, filter_by_title};
use crate::core::markup::Selectors;
use crate::core::orderer::order_by_deadline;
use crate::core::parser::FieldParser;
use crate::core::{ConfigProvider, EntryFragment, OpportunityRecord, PageFetcher, Pipeline};
use crate::utils::error::Result;

/// Fetch → extract → filter → parse → order, for one listing page.
pub struct OpportunityPipeline<F: PageFetcher, C: ConfigProvider> {
    fetcher: F,
    config: C,
    selectors: Selectors,
    parser: FieldParser,
}

impl<F: PageFetcher, C: ConfigProvider> OpportunityPipeline<F, C> {
    pub fn new(fetcher: F, config: C) -> Result<Self> {
        let selectors = Selectors::compile(config.profile())?;
        let parser = FieldParser::new(config.profile())?;
        Ok(Self {
            fetcher,
            config,
            selectors,
            parser,
        })
    }
}

#[async_trait::async_trait]
impl<F: PageFetcher, C: ConfigProvider> Pipeline for OpportunityPipeline<F, C> {
    async fn extract(&self) -> Result<Vec<EntryFragment>> {
        let page = self.fetcher.fetch(self.config.url()).await?;
        tracing::debug!("Extracting open entries from {}", page.url);

        Ok(extract_open_entries(
            &page.markup,
            self.config.profile(),
            &self.selectors,
        ))
    }

    async fn transform(&self, fragments: Vec<EntryFragment>) -> Result<Vec<OpportunityRecord>> {
        let total = fragments.len();

        let fragments = filter_by_title(
            fragments,
            self.config.title_filters(),
            &self.selectors.title,
        );
        tracing::debug!("Title filter kept {} of {} entries", fragments.len(), total);

        let after_title = fragments.len();
        let fragments = filter_by_content(fragments, self.config.content_filters());
        tracing::debug!(
            "Content filter kept {} of {} entries",
            fragments.len(),
            after_title
        );

        Ok(self.parser.parse_all(&fragments, &self.config.base_url()))
    }

    async fn order(&self, records: Vec<OpportunityRecord>) -> Result<Vec<OpportunityRecord>> {
        Ok(order_by_deadline(records))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SearchConfig;
    use crate::domain::model::ListingPage;
    use crate::utils::error::OpportunityError;
    use async_trait::async_trait;

    struct StaticFetcher {
        markup: String,
    }

    #[async_trait]
    impl PageFetcher for StaticFetcher {
        async fn fetch(&self, url: &str) -> Result<ListingPage> {
            Ok(ListingPage {
                url: url.to_string(),
                markup: self.markup.clone(),
            })
        }
    }

    struct FailingFetcher;

    #[async_trait]
    impl PageFetcher for FailingFetcher {
        async fn fetch(&self, url: &str) -> Result<ListingPage> {
            Err(OpportunityError::HttpStatus {
                url: url.to_string(),
                status: 502,
            })
        }
    }

    const LISTING: &str = r#"<ul class="list">
<li class="box_col aberta"><a class="link_col" href="/op/1"><strong class="title">Bolsa de PD</strong></a><span class="text-resumo">Redes neurais</span><p>Inscrições até: 20/03/2025</p></li>
<li class="box_col aberta"><a class="link_col" href="/op/2"><strong class="title">Bolsa de TT</strong></a><span class="text-resumo">Química</span><p>Inscrições até: 01/02/2025</p></li>
</ul>"#;

    #[tokio::test]
    async fn test_stages() {
        let config = SearchConfig {
            title_filters: ["Bolsa"].into_iter().collect(),
            ..SearchConfig::unfiltered("https://fapesp.br/oportunidades/")
        };
        let pipeline = OpportunityPipeline::new(
            StaticFetcher {
                markup: LISTING.to_string(),
            },
            config,
        )
        .unwrap();

        let fragments = pipeline.extract().await.unwrap();
        assert_eq!(fragments.len(), 2);

        let records = pipeline.transform(fragments).await.unwrap();
        assert_eq!(records[0].link, "https://fapesp.br/op/1");

        let ordered = pipeline.order(records).await.unwrap();
        assert_eq!(ordered[0].title, "Bolsa de TT");
        assert_eq!(ordered[1].title, "Bolsa de PD");
    }

    #[tokio::test]
    async fn test_fetch_failure_propagates() {
        let pipeline =
            OpportunityPipeline::new(FailingFetcher, SearchConfig::unfiltered("https://fapesp.br/")).unwrap();
        let err = pipeline.extract().await.unwrap_err();
        assert!(matches!(err, OpportunityError::HttpStatus { status: 502, .. }));
    }

    #[test]
    fn test_invalid_profile_selector_rejected() {
        let mut config = SearchConfig::unfiltered("https://fapesp.br/");
        config.profile.title_selector = "strong[".to_string();
        let result = OpportunityPipeline::new(FailingFetcher, config);
        assert!(matches!(result, Err(OpportunityError::InvalidSelector { .. })));
    }
}
