// (key, italian, english)
pub(super) const STRINGS: &[(&str, &str, &str)] = &[
    // Navigation
    ("nav.problem", "Problema", "Problem"),
    ("nav.solution", "Soluzione", "Solution"),
    ("nav.features", "Caratteristiche", "Features"),
    ("nav.workflow", "Come Funziona", "How It Works"),
    ("nav.benefits", "Vantaggi", "Benefits"),
    ("nav.login", "Accedi", "Login"),
    ("nav.joinWaitingList", "Lista d'attesa", "Waiting list"),
    ("nav.language", "Lingua", "Language"),
    // Hero
    (
        "hero.subtitle",
        "Il primo marketplace dedicato alla consulenza di sostenibilità che connette aziende, consulenti ed enti di certificazione, con approccio \"zero re-work\".",
        "The first marketplace dedicated to sustainability consulting that connects companies, consultants and certification bodies, with a \"zero re-work\" approach.",
    ),
    ("hero.signupCompany", "Iscriviti come Azienda", "Sign up as a Company"),
    ("hero.signupConsultant", "Iscriviti come Consulente", "Sign up as a Consultant"),
    (
        "hero.signupCertification",
        "Iscriviti come Ente di Certificazione",
        "Sign up as a Certification Body",
    ),
    (
        "hero.motto",
        "Una piattaforma, tre esperienze personalizzate.",
        "One platform, three tailored experiences.",
    ),
    // Problem / solution
    ("problem.title", "Il problema oggi", "The problem today"),
    (
        "problem.body",
        "Le aziende faticano a trovare consulenti qualificati per EPD, LCA e CFP. I consulenti non riescono a entrare in contatto con i clienti giusti. Gli enti di certificazione sono spesso coinvolti troppo tardi.",
        "Companies struggle to find qualified consultants for EPD, LCA and CFP. Consultants cannot reach the right clients. Certification bodies are often involved too late.",
    ),
    (
        "problem.emphasis",
        "Tutto ciò genera errori, costi, e rework.",
        "All of this leads to errors, costs and rework.",
    ),
    ("solution.title", "La nostra soluzione", "Our solution"),
    (
        "solution.body",
        "Sustanet è la prima piattaforma internazionale che usa intelligenza artificiale per automatizzare il matching tra domanda e offerta di servizi di sostenibilità.",
        "Sustanet is the first international platform that uses artificial intelligence to automate matching between demand and supply of sustainability services.",
    ),
    (
        "solution.emphasis",
        "Zero rework. Massima efficienza.",
        "Zero rework. Maximum efficiency.",
    ),
    // Features
    ("features.title", "Cosa offre la piattaforma", "Platform Features"),
    ("features.onboarding.title", "Onboarding personalizzato", "Personalized Onboarding"),
    (
        "features.onboarding.description",
        "Percorso guidato per aziende, consulenti e enti di certificazione",
        "Guided path for companies, consultants and certification bodies",
    ),
    ("features.ai.title", "AI Matching", "AI Matching"),
    (
        "features.ai.description",
        "Algoritmo avanzato tra richieste e competenze verificate",
        "Advanced algorithm matching requests with verified skills",
    ),
    ("features.import.title", "Import automatico dati", "Automatic Data Import"),
    (
        "features.import.description",
        "Semplificazione del processo di acquisizione dati d'inventario per EPD",
        "Simplified inventory data acquisition process for EPD",
    ),
    ("features.monitoring.title", "Monitoraggio progetto", "Project Monitoring"),
    (
        "features.monitoring.description",
        "Controllo in tempo reale con alert e notifiche personalizzate",
        "Real-time control with customized alerts and notifications",
    ),
    // Workflow
    ("workflow.title", "Come funziona", "How it works"),
    (
        "workflow.subtitle",
        "Quattro passi dalla richiesta alla certificazione",
        "Four steps from request to certification",
    ),
    ("workflow.step1.title", "Registrazione", "Sign up"),
    (
        "workflow.step1.description",
        "Crea il tuo profilo come azienda, consulente o ente di certificazione",
        "Create your profile as a company, consultant or certification body",
    ),
    ("workflow.step2.title", "Onboarding tecnico", "Technical onboarding"),
    (
        "workflow.step2.description",
        "Descrivi il progetto con un percorso guidato, senza errori iniziali",
        "Describe the project through a guided path, with no early mistakes",
    ),
    ("workflow.step3.title", "Matching", "Matching"),
    (
        "workflow.step3.description",
        "L'AI propone il consulente con le competenze giuste per il tuo settore",
        "AI proposes the consultant with the right skills for your sector",
    ),
    ("workflow.step4.title", "Gestione progetto", "Project management"),
    (
        "workflow.step4.description",
        "Documenti, scadenze e comunicazioni in un unico spazio condiviso",
        "Documents, deadlines and communication in one shared space",
    ),
    // Benefits
    ("benefits.title", "Vantaggi per ciascun target", "Benefits for each audience"),
    (
        "benefits.subtitle",
        "Scopri i benefici specifici per il tuo ruolo",
        "Discover the benefits specific to your role",
    ),
    ("benefits.companies.title", "🏢 Aziende", "🏢 Companies"),
    (
        "benefits.companies.1",
        "Risparmio di tempo e costi (fino a 10.000€/progetto)",
        "Time and cost savings (up to €10,000/project)",
    ),
    (
        "benefits.companies.2",
        "Accesso a consulenti verificati e matching istantaneo",
        "Access to verified consultants and instant matching",
    ),
    (
        "benefits.companies.3",
        "Nessun errore iniziale: onboarding tecnico accurato",
        "No early mistakes: accurate technical onboarding",
    ),
    ("benefits.consultants.title", "👩‍💼 Consulenti", "👩‍💼 Consultants"),
    (
        "benefits.consultants.1",
        "Opportunità già profilate, senza spese di marketing",
        "Pre-qualified opportunities, with no marketing spend",
    ),
    (
        "benefits.consultants.2",
        "Caricamento CV e selezione dei settori di competenza",
        "CV upload and selection of areas of expertise",
    ),
    (
        "benefits.consultants.3",
        "Area personale, rating, e gestione progetti semplificata",
        "Personal area, ratings and simplified project management",
    ),
    ("benefits.certification.title", "🏛 Enti di certificazione", "🏛 Certification bodies"),
    (
        "benefits.certification.1",
        "Coinvolgimento anticipato nel flusso",
        "Early involvement in the workflow",
    ),
    (
        "benefits.certification.2",
        "Dossier clienti ordinati e standardizzati",
        "Tidy, standardized client dossiers",
    ),
    (
        "benefits.certification.3",
        "Sincronizzazione automatica delle fasi",
        "Automatic synchronization of project phases",
    ),
    // CTA
    (
        "cta.title",
        "Inizia subito. La sostenibilità non può aspettare.",
        "Start now. Sustainability cannot wait.",
    ),
    (
        "cta.subtitle",
        "Unisciti alla piattaforma che sta rivoluzionando il modo in cui aziende, consulenti ed enti di certificazione collaborano per un futuro sostenibile.",
        "Join the platform that is revolutionizing how companies, consultants, and certification bodies collaborate for a sustainable future.",
    ),
    (
        "cta.appointment.title",
        "Prenota il tuo primo appuntamento gratuito",
        "Schedule your free first appointment",
    ),
    (
        "cta.appointment.description",
        "30 minuti gratuiti per tutte le aziende che si iscrivono",
        "30 free minutes for all companies that sign up",
    ),
    ("cta.book", "Prenota ora", "Book now"),
    // Footer
    (
        "footer.slogan",
        "Il marketplace della sostenibilità che connette aziende, consulenti ed enti di certificazione.",
        "The sustainability marketplace that connects companies, consultants and certification bodies.",
    ),
    ("footer.about", "Chi siamo", "About us"),
    ("footer.story", "La nostra storia", "Our story"),
    ("footer.team", "Team", "Team"),
    ("footer.partners", "Partner", "Partners"),
    ("footer.contacts", "Contatti", "Contacts"),
    ("footer.email", "Email", "Email"),
    ("footer.support", "Supporto", "Support"),
    ("footer.linkedin", "LinkedIn", "LinkedIn"),
    ("footer.legal", "Legale", "Legal"),
    ("footer.privacy", "Privacy Policy", "Privacy Policy"),
    ("footer.terms", "Termini e Condizioni", "Terms and Conditions"),
    ("footer.cookies", "Cookie Policy", "Cookie Policy"),
    ("footer.rights", "Tutti i diritti riservati.", "All rights reserved."),
    // Not found
    ("notFound.title", "Pagina non trovata", "Page not found"),
    ("notFound.back", "Torna alla home", "Back to home"),
    // Waiting list (contact form)
    ("waitingList.title", "Unisciti alla lista d'attesa", "Join the waiting list"),
    (
        "waitingList.description",
        "Lasciaci i tuoi dati: ti avviseremo al lancio di Sustanet.",
        "Leave us your details: we will let you know when Sustanet launches.",
    ),
    ("waitingList.firstName", "Nome*", "First name*"),
    ("waitingList.firstNamePlaceholder", "Inserisci il tuo nome", "Enter your first name"),
    ("waitingList.lastName", "Cognome*", "Last name*"),
    ("waitingList.lastNamePlaceholder", "Inserisci il tuo cognome", "Enter your last name"),
    ("waitingList.email", "Email*", "Email*"),
    ("waitingList.emailPlaceholder", "esempio@dominio.it", "example@domain.com"),
    ("waitingList.organizationType", "Tipo di organizzazione*", "Organization type*"),
    (
        "waitingList.selectOrganizationType",
        "Seleziona il tipo di organizzazione",
        "Select the organization type",
    ),
    ("waitingList.organizationType.azienda", "Azienda", "Company"),
    ("waitingList.organizationType.consulente", "Consulente", "Consultant"),
    ("waitingList.organizationType.ente", "Ente di certificazione", "Certification body"),
    ("waitingList.organizationName", "Nome organizzazione", "Organization name"),
    (
        "waitingList.organizationNamePlaceholder",
        "Inserisci il nome dell'organizzazione",
        "Enter the organization name",
    ),
    ("waitingList.submit", "Iscriviti", "Join"),
    ("waitingList.cancel", "Annulla", "Cancel"),
    // Participation gate
    ("survey.gate.title", "Aiutaci a migliorare", "Help us improve"),
    (
        "survey.gate.question",
        "Possiamo rubarle 5 minuti per raccogliere qualche informazione utile per migliorare Sustanet?",
        "Can we steal 5 minutes of your time to collect some useful information to improve Sustanet?",
    ),
    ("survey.gate.confirm", "Conferma", "Confirm"),
    ("survey.yesNo.yes", "SI", "YES"),
    ("survey.yesNo.no", "NO", "NO"),
    // Shared survey labels
    ("survey.cancel", "Annulla", "Cancel"),
    ("survey.submit", "Invia", "Submit"),
    (
        "survey.scale",
        "Scala da 1 (Per niente importante) a 5 (Molto importante)",
        "Scale from 1 (Not important at all) to 5 (Very important)",
    ),
    ("survey.specifyOther", "Specificare altro", "Specify other"),
    (
        "survey.consent",
        "Acconsento al trattamento dei dati forniti ai fini dello sviluppo della piattaforma Sustanet.",
        "I consent to the processing of the data provided for the development of the Sustanet platform.",
    ),
    ("rating.1", "1", "1"),
    ("rating.2", "2", "2"),
    ("rating.3", "3", "3"),
    ("rating.4", "4", "4"),
    ("rating.5", "5", "5"),
    ("channel.contactNetwork", "Rete di contatti", "Contact network"),
    ("channel.phoneSearch", "Ricerca telefonica", "Phone search"),
    ("channel.linkedin", "LinkedIn", "LinkedIn"),
    (
        "channel.events",
        "Eventi tematici (webinar, fiere, ecc.)",
        "Thematic events (webinars, fairs, etc.)",
    ),
    ("channel.other", "Altro (specificare)", "Other (specify)"),
    // Company survey
    ("survey.company.title", "Questionario aziende", "Company questionnaire"),
    (
        "survey.company.description",
        "Le sue risposte ci aiutano a costruire una piattaforma su misura per le aziende.",
        "Your answers help us build a platform tailored to companies.",
    ),
    (
        "survey.company.companySize",
        "In che tipologia di azienda lavora?",
        "What type of company do you work in?",
    ),
    ("survey.company.companySize.small", "Piccola (<50 dipendenti)", "Small (<50 employees)"),
    (
        "survey.company.companySize.medium",
        "Media (50 < dipendenti < 250)",
        "Medium (50 < employees < 250)",
    ),
    ("survey.company.companySize.large", "Grande (>250 dipendenti)", "Large (>250 employees)"),
    (
        "survey.company.country",
        "Stato (indicare lo stato dove è presente l'azienda)",
        "Country (indicate where the company is located)",
    ),
    (
        "survey.company.city",
        "Città (indicare la città dove è presente l'azienda)",
        "City (indicate where the company is located)",
    ),
    (
        "survey.company.role",
        "1. Qual è il suo ruolo all'interno dell'organizzazione? BARRARE UNA SOLA RISPOSTA",
        "1. What is your role within the organization? SELECT ONLY ONE ANSWER",
    ),
    ("survey.company.role.management", "Direzione", "Management"),
    ("survey.company.role.technical", "Area tecnica", "Technical Area"),
    ("survey.company.role.commercial", "Area commerciale", "Commercial Area"),
    (
        "survey.company.sustainabilityImportance",
        "2. Quanto considera rilevante il tema della sostenibilità per la sua azienda?",
        "2. How relevant do you consider the topic of sustainability for your company?",
    ),
    (
        "survey.company.certificationImportance",
        "3. Quanto ritiene siano importanti le certificazioni di sostenibilità per la Sua azienda?",
        "3. How important do you consider sustainability certifications for your company?",
    ),
    (
        "survey.company.epdChallenges",
        "4. Quali criticità ha riscontrato nella predisposizione o redazione di una EPD (Environmental Product Declaration)? BARRARE UNA O PIU' RISPOSTE",
        "4. What critical issues have you encountered in the preparation or drafting of an EPD (Environmental Product Declaration)? SELECT ONE OR MORE ANSWERS",
    ),
    ("survey.company.epdChallenges.complexity", "Complessità dell'argomento", "Complexity of the topic"),
    (
        "survey.company.epdChallenges.findConsultant",
        "Difficoltà nel reperimento di un consulente qualificato",
        "Difficulty in finding a qualified consultant",
    ),
    (
        "survey.company.epdChallenges.projectManagement",
        "Monitoraggio e gestione del progetto",
        "Project monitoring and management",
    ),
    (
        "survey.company.epdChallenges.dataCollection",
        "Raccolta strutturata dei dati",
        "Structured data collection",
    ),
    (
        "survey.company.epdChallenges.certificationProcess",
        "Iter del processo di certificazione",
        "Certification process workflow",
    ),
    ("survey.company.epdChallenges.other", "Altro (specificare)", "Other (specify)"),
    (
        "survey.company.consultantChannels",
        "5. Attraverso quali canali individuate i consulenti/società di consulenza in ambito sostenibilità? BARRARE UNA O PIU' RISPOSTE",
        "5. Through which channels do you identify consultants/consulting companies in the sustainability field? SELECT ONE OR MORE ANSWERS",
    ),
    (
        "survey.company.consultantChannels.personalNetwork",
        "Rete di contatti personali",
        "Personal contact network",
    ),
    (
        "survey.company.consultantChannels.onlineSearch",
        "Ricerca online (es. Google)",
        "Online search (e.g. Google)",
    ),
    ("survey.company.consultantChannels.linkedin", "LinkedIn", "LinkedIn"),
    (
        "survey.company.consultantChannels.events",
        "Eventi tematici (webinar, fiere, ecc.)",
        "Thematic events (webinars, fairs, etc.)",
    ),
    ("survey.company.consultantChannels.other", "Altro (specificare)", "Other (specify)"),
    (
        "survey.company.contactEaseRating",
        "6. Quanto è semplice, secondo la sua esperienza, entrare in contatto con consulenti o società di consulenza?",
        "6. How easy is it, based on your experience, to get in touch with consultants or consulting companies?",
    ),
    (
        "survey.company.updateFrequency",
        "7. Con quale frequenza ricevete aggiornamenti sullo stato di avanzamento dei documenti tecnici richiesti e del processo di certificazione? BARRARE UNA SOLA RISPOSTA",
        "7. How frequently do you receive updates on the progress of the requested technical documents and certification process? SELECT ONLY ONE ANSWER",
    ),
    (
        "survey.company.updateFrequency.multipleWeekly",
        "Più volte a settimana",
        "Multiple times a week",
    ),
    ("survey.company.updateFrequency.weekly", "Ogni settimana", "Every week"),
    ("survey.company.updateFrequency.biweekly", "Ogni 15 giorni", "Every two weeks"),
    ("survey.company.updateFrequency.monthly", "Una volta al mese", "Once a month"),
    (
        "survey.company.updateFrequency.quarterly",
        "Più volte a trimestre",
        "Multiple times per quarter",
    ),
    ("survey.company.updateFrequency.other", "Altro (specificare)", "Other (specify)"),
    (
        "survey.company.onboardingInterestRating",
        "8. Quanto ritiene interessante la funzione di onboarding personalizzato per il servizio EPD integrato nella piattaforma Sustanet?",
        "8. How interesting do you find the personalized onboarding function for the EPD service integrated into the Sustanet platform?",
    ),
    (
        "survey.company.matchingInterestRating",
        "9. Quanto ritiene interessante la funzionalità di matching automatico con il miglior consulente dotato di competenze specifiche per il settore in cui opera la sua azienda?",
        "9. How interesting do you find the automatic matching functionality with the best consultant with specific skills for the sector in which your company operates?",
    ),
    (
        "survey.company.usefulAspects",
        "10. Quali aspetti trova particolarmente utili rispetto alle soluzioni attualmente disponibili sul mercato? (facoltativa)",
        "10. What aspects do you find particularly useful compared to solutions currently available on the market? (optional)",
    ),
    (
        "survey.company.suggestions",
        "11. Ha suggerimenti da proporre per il miglioramento della piattaforma? (facoltativa)",
        "11. Do you have suggestions for improving the platform? (optional)",
    ),
    (
        "survey.company.betaTesting",
        "12. È interessato/a a partecipare alla fase di beta testing della piattaforma? BARRARE UNA SOLA RISPOSTA",
        "12. Are you interested in participating in the beta testing phase of the platform? SELECT ONLY ONE ANSWER",
    ),
    // Consultant survey
    ("survey.consultant.title", "Questionario consulenti", "Consultant questionnaire"),
    (
        "survey.consultant.description",
        "Le sue risposte ci aiutano a costruire una piattaforma su misura per i consulenti.",
        "Your answers help us build a platform tailored to consultants.",
    ),
    (
        "survey.consultant.workStatus",
        "Qual è il suo inquadramento lavorativo?",
        "What is your work status?",
    ),
    ("survey.consultant.workStatus.freelance", "Partita IVA", "Freelancer"),
    (
        "survey.consultant.workStatus.smallCompany",
        "Dipendente di una piccola società di consulenza (<10 M di fatturato)",
        "Employee of a small consulting company (<10 M turnover)",
    ),
    (
        "survey.consultant.workStatus.mediumCompany",
        "Dipendente di una società di consulenza media (10 M < fatturato < 50M)",
        "Employee of a medium consulting company (10 M < turnover < 50M)",
    ),
    (
        "survey.consultant.workStatus.largeCompany",
        "Dipendente di una grande società di consulenza (>50 M di fatturato)",
        "Employee of a large consulting company (>50 M turnover)",
    ),
    (
        "survey.consultant.country",
        "Stato (indicare lo stato di localizzazione)",
        "Country (indicate the location)",
    ),
    (
        "survey.consultant.city",
        "Città (indicare la città di localizzazione)",
        "City (indicate the location)",
    ),
    (
        "survey.consultant.epdDifficulties",
        "1. Quali sono le principali difficoltà riscontrate nella redazione di una EPD (Environmental Product Declaration)? BARRARE UNA O PIU' RISPOSTE",
        "1. What are the main difficulties encountered in drafting an EPD (Environmental Product Declaration)? SELECT ONE OR MORE ANSWERS",
    ),
    (
        "survey.consultant.epdDifficulties.clientAcquisition",
        "Acquisizione di nuovi clienti",
        "Acquisition of new clients",
    ),
    (
        "survey.consultant.epdDifficulties.clientCommunication",
        "Complessità comunicativa con l'azienda cliente",
        "Communication complexity with the client company",
    ),
    (
        "survey.consultant.epdDifficulties.dataStructure",
        "Strutturazione della raccolta dati",
        "Structuring data collection",
    ),
    (
        "survey.consultant.epdDifficulties.timeManagement",
        "Gestione delle tempistiche con clienti multipli",
        "Managing timelines with multiple clients",
    ),
    ("survey.consultant.epdDifficulties.other", "Altro (specificare)", "Other (specify)"),
    (
        "survey.consultant.clientAcquisitionChannels",
        "2. Quali canali utilizza per individuare aziende interessate ai suoi servizi di consulenza? BARRARE UNA O PIU' RISPOSTE",
        "2. Which channels do you use to identify companies interested in your consulting services? SELECT ONE OR MORE ANSWERS",
    ),
    (
        "survey.consultant.platformInfoUtilityRating",
        "3. Quanto ritiene utile una piattaforma che fornisca tutte le informazioni necessarie per l'inquadramento del progetto EPD in base agli standard e regolamenti?",
        "3. How useful do you consider a platform that provides all the necessary information for framing the EPD project according to standards and regulations?",
    ),
    (
        "survey.consultant.platformClientAcquisitionRating",
        "4. Quanto sarebbe interessato a utilizzare una piattaforma che consenta l'acquisizione di clienti in base alle proprie competenze tecniche?",
        "4. How interested would you be in using a platform that allows the acquisition of clients based on your technical skills?",
    ),
    (
        "survey.consultant.platformDataCollectionRating",
        "5. Quanto le risulterebbe utile una piattaforma che automatizzi la raccolta dati di inventario per la redazione di EPD?",
        "5. How useful would you find a platform that automates inventory data collection for EPD preparation?",
    ),
    (
        "survey.consultant.platformProjectManagementRating",
        "6. Quanto sarebbe interessato a una piattaforma con funzionalità integrate per la gestione dei progetti EPD (caricamento documenti, raccolta dati automatizzata, chat con il cliente, supporto gestione scadenze e alert)?",
        "6. How interested would you be in a platform with integrated features for managing EPD projects (document uploading, automated data collection, client chat, deadline management support and alerts)?",
    ),
    (
        "survey.consultant.timeSpentOnAcquisition",
        "7. Quale percentuale del tempo totale dedica, in media, alle attività di acquisizione, onboarding e comunicazione con l'azienda cliente e l'ente certificatore? BARRARE UNA SOLA RISPOSTA",
        "7. What percentage of total time do you dedicate, on average, to acquisition, onboarding and communication activities with the client company and the certification body? SELECT ONLY ONE ANSWER",
    ),
    ("survey.consultant.timeSpentOnAcquisition.5-15", "5–15%", "5–15%"),
    ("survey.consultant.timeSpentOnAcquisition.15-25", "15–25%", "15–25%"),
    ("survey.consultant.timeSpentOnAcquisition.25-35", "25–35%", "25–35%"),
    ("survey.consultant.timeSpentOnAcquisition.more35", "Più del 35%", "More than 35%"),
    (
        "survey.consultant.subscriptionWillingness",
        "8. La piattaforma prevederà un abbonamento che consente l'acquisizione illimitata di clienti. Sarebbe disposto a sostenerne il costo? BARRARE UNA SOLA RISPOSTA",
        "8. The platform will include a subscription that allows unlimited client acquisition. Would you be willing to bear the cost? SELECT ONLY ONE ANSWER",
    ),
    (
        "survey.consultant.betaTesting",
        "9. È interessato a partecipare alla fase di beta testing della piattaforma? BARRARE UNA SOLA RISPOSTA",
        "9. Are you interested in participating in the beta testing phase of the platform? SELECT ONLY ONE ANSWER",
    ),
    // Certification body survey
    (
        "survey.certification.title",
        "Questionario enti di certificazione",
        "Certification body questionnaire",
    ),
    (
        "survey.certification.description",
        "Le sue risposte ci aiutano a costruire una piattaforma su misura per gli enti di certificazione.",
        "Your answers help us build a platform tailored to certification bodies.",
    ),
    (
        "survey.certification.orgSize",
        "In che tipologia di organismo lavora?",
        "What type of organization do you work for?",
    ),
    (
        "survey.certification.orgSize.small",
        "Di piccole dimensioni (<10 M di fatturato)",
        "Small size (<10 M turnover)",
    ),
    (
        "survey.certification.orgSize.medium",
        "Di medie dimensioni (10 M < fatturato < 50M)",
        "Medium size (10 M < turnover < 50M)",
    ),
    (
        "survey.certification.orgSize.large",
        "Di grandi dimensioni (>50 M di fatturato)",
        "Large size (>50 M turnover)",
    ),
    (
        "survey.certification.verificationChallenges",
        "1. Quali sono le principali criticità riscontrate nel processo di verifica di un documento EPD? BARRARE UNA O PIU' RISPOSTE",
        "1. What are the main critical issues encountered in the verification process of an EPD document? SELECT ONE OR MORE ANSWERS",
    ),
    (
        "survey.certification.verificationChallenges.clientAcquisition",
        "Difficoltà nell'acquisizione del cliente",
        "Difficulty in client acquisition",
    ),
    (
        "survey.certification.verificationChallenges.companyComm",
        "Comunicazione inefficace con l'azienda",
        "Ineffective communication with the company",
    ),
    (
        "survey.certification.verificationChallenges.consultantComm",
        "Comunicazione inefficace con il consulente",
        "Ineffective communication with the consultant",
    ),
    (
        "survey.certification.verificationChallenges.nonCompliance",
        "Documentazione non conforme ai requisiti normativi",
        "Documentation not compliant with regulatory requirements",
    ),
    (
        "survey.certification.verificationChallenges.delays",
        "Ritardi nella consegna dei documenti",
        "Delays in document delivery",
    ),
    (
        "survey.certification.verificationChallenges.other",
        "Altro (specificare)",
        "Other (specify)",
    ),
    (
        "survey.certification.companyAcquisitionChannels",
        "2. Attraverso quali canali individua le aziende da certificare? BARRARE UNA O PIU' RISPOSTE",
        "2. Through which channels do you identify companies to certify? SELECT ONE OR MORE ANSWERS",
    ),
    (
        "survey.certification.platformInfoUtilityRating",
        "3. Quanto sarebbe utile una piattaforma che raccolga in un unico spazio tutte le informazioni necessarie per l'inquadramento del progetto secondo gli standard/regolamenti applicabili?",
        "3. How useful would a platform be that gathers in one place all the information needed to frame the project according to the applicable standards/regulations?",
    ),
    (
        "survey.certification.platformClientAcquisitionRating",
        "4. Quanto sarebbe utile una piattaforma che permetta l'acquisizione del cliente con un progetto EPD già strutturato e con scadenze definite?",
        "4. How useful would a platform be that allows acquiring clients with an already structured EPD project and defined deadlines?",
    ),
    (
        "survey.certification.subscriptionWillingness",
        "5. La piattaforma prevederà un abbonamento per l'acquisizione illimitata di clienti. Sareste disposti a sottoscriverlo per accedere a tutte le sue funzionalità? BARRARE UNA SOLA RISPOSTA",
        "5. The platform will include a subscription for unlimited client acquisition. Would you be willing to subscribe to access all its features? SELECT ONLY ONE ANSWER",
    ),
    (
        "survey.certification.betaTesting",
        "6. È interessato a partecipare alla fase di beta testing della piattaforma? BARRARE UNA SOLA RISPOSTA",
        "6. Are you interested in participating in the beta testing phase of the platform? SELECT ONLY ONE ANSWER",
    ),
    // Success
    (
        "success.title",
        "Grazie per la tua partecipazione!",
        "Thank you for your participation!",
    ),
    (
        "success.body",
        "Le tue risposte ci aiuteranno a migliorare Sustanet.",
        "Your answers will help us improve Sustanet.",
    ),
    ("success.close", "Chiudi", "Close"),
    // Validation
    ("validation.required", "Campo obbligatorio", "This field is required"),
    (
        "validation.minLength",
        "Deve avere almeno {min} caratteri",
        "Must be at least {min} characters long",
    ),
    ("validation.email", "Email non valida", "Invalid email"),
    ("validation.choose", "Seleziona un'opzione", "Select an option"),
    ("validation.invalidOption", "Opzione non valida", "Invalid option"),
    (
        "validation.selectAtLeastOne",
        "Seleziona almeno un'opzione",
        "Select at least one option",
    ),
    (
        "validation.specifyOther",
        "Specifica la voce \"Altro\"",
        "Please specify the \"Other\" option",
    ),
    (
        "validation.consent",
        "È necessario acconsentire al trattamento dei dati",
        "You must consent to the processing of your data",
    ),
];
